use super::types::{LoadMode, TreeParams};
use super::validate::{validate, ParamsError};
use crate::leaf::{LeafEncoding, LeafType};

/// Builder used to assemble [`TreeParams`] with validation.
///
/// | Field | Default |
/// |-------|---------|
/// | `leaf_encoding` | `["address", "address"]` |
/// | `load_mode` | [`LoadMode::Trusted`] |
/// | `max_leaves` | `u32::MAX` |
#[derive(Debug, Clone)]
pub struct TreeParamsBuilder {
    pub leaf_encoding: LeafEncoding,
    pub load_mode: LoadMode,
    pub max_leaves: u32,
}

impl TreeParamsBuilder {
    pub fn new() -> Self {
        Self::from_profile(BuiltinProfile::ADDRESS_PAIR)
    }

    /// Loads one of the built-in profiles.
    ///
    /// | Profile | Leaf encoding |
    /// |---------|---------------|
    /// | `ADDRESS_PAIR` | `["address", "address"]` |
    /// | `ADDRESS_BYTES32` | `["address", "bytes32"]` |
    pub fn from_profile(profile: BuiltinProfile) -> Self {
        let leaf_encoding = match profile {
            BuiltinProfile::ADDRESS_PAIR => LeafEncoding::address_pair(),
            BuiltinProfile::ADDRESS_BYTES32 => {
                LeafEncoding::new(vec![LeafType::Address, LeafType::Bytes32])
            }
        };
        Self {
            leaf_encoding,
            load_mode: LoadMode::Trusted,
            max_leaves: u32::MAX,
        }
    }

    pub fn leaf_encoding(mut self, encoding: LeafEncoding) -> Self {
        self.leaf_encoding = encoding;
        self
    }

    pub fn load_mode(mut self, mode: LoadMode) -> Self {
        self.load_mode = mode;
        self
    }

    pub fn max_leaves(mut self, max_leaves: u32) -> Self {
        self.max_leaves = max_leaves;
        self
    }

    /// Validates the builder fields and emits a [`TreeParams`] instance.
    pub fn build(&self) -> Result<TreeParams, ParamsError> {
        let params = TreeParams {
            leaf_encoding: self.leaf_encoding.clone(),
            load_mode: self.load_mode,
            max_leaves: self.max_leaves,
        };
        validate(&params)?;
        Ok(params)
    }
}

impl Default for TreeParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Supported built-in profiles.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinProfile {
    /// Identifier pairs, the default allowlist profile.
    ADDRESS_PAIR,
    /// Identifier plus a 32-byte payload (e.g. a commitment or amount word).
    ADDRESS_BYTES32,
}
