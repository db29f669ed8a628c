use serde::{Deserialize, Serialize};

use crate::leaf::LeafEncoding;

/// Format tag written into every tree dump.
pub const DUMP_FORMAT: &str = "standard-v1";

/// How much of a serialized tree is re-checked on load.
///
/// | Variant | Behaviour |
/// |---------|-----------|
/// | `Trusted` | Shape and lengths are checked, stored hashes are taken as-is. |
/// | `Strict` | Every leaf hash and internal node is recomputed and compared. |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    #[default]
    Trusted,
    Strict,
}

/// Validated tree configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeParams {
    pub(crate) leaf_encoding: LeafEncoding,
    pub(crate) load_mode: LoadMode,
    pub(crate) max_leaves: u32,
}

impl TreeParams {
    pub fn leaf_encoding(&self) -> &LeafEncoding {
        &self.leaf_encoding
    }

    pub fn load_mode(&self) -> LoadMode {
        self.load_mode
    }

    /// Upper bound on the number of leaves accepted by `build` and `load`.
    pub fn max_leaves(&self) -> u32 {
        self.max_leaves
    }
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            leaf_encoding: LeafEncoding::address_pair(),
            load_mode: LoadMode::Trusted,
            max_leaves: u32::MAX,
        }
    }
}
