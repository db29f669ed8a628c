use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::value::{LeafField, LeafValue};
use super::EncodingError;
use crate::hash::{keccak256, Hash};

/// Width of one encoded field word.
pub const WORD_WIDTH: usize = 32;

/// Type tag of a single leaf field.
///
/// | Tag | Field | Word layout |
/// |-----|-------|-------------|
/// | `address` | 20-byte identifier | 12 zero bytes followed by the identifier |
/// | `bytes32` | 32 raw bytes | copied verbatim |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafType {
    Address,
    Bytes32,
}

impl LeafType {
    pub const fn tag(self) -> &'static str {
        match self {
            LeafType::Address => "address",
            LeafType::Bytes32 => "bytes32",
        }
    }

    pub(crate) const fn code(self) -> u8 {
        match self {
            LeafType::Address => 1,
            LeafType::Bytes32 => 2,
        }
    }

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(LeafType::Address),
            2 => Some(LeafType::Bytes32),
            _ => None,
        }
    }
}

impl fmt::Display for LeafType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LeafType {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(LeafType::Address),
            "bytes32" => Ok(LeafType::Bytes32),
            other => Err(EncodingError::UnknownType(other.to_owned())),
        }
    }
}

/// Ordered field types describing how a [`LeafValue`] is encoded.
///
/// The descriptor is part of the protocol: producer and verifier must agree
/// on it, otherwise every proof fails without a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeafEncoding(Vec<LeafType>);

impl LeafEncoding {
    pub fn new(types: Vec<LeafType>) -> Self {
        Self(types)
    }

    /// Default profile: two identifiers.
    pub fn address_pair() -> Self {
        Self(vec![LeafType::Address, LeafType::Address])
    }

    pub fn types(&self) -> &[LeafType] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks arity and per-field types of `value` against the descriptor.
    pub fn check(&self, value: &LeafValue) -> Result<(), EncodingError> {
        if value.len() != self.0.len() {
            return Err(EncodingError::ArityMismatch {
                expected: self.0.len(),
                got: value.len(),
            });
        }
        for (position, (field, expected)) in value.fields().iter().zip(&self.0).enumerate() {
            if field.leaf_type() != *expected {
                return Err(EncodingError::TypeMismatch {
                    position,
                    expected: *expected,
                    got: field.leaf_type(),
                });
            }
        }
        Ok(())
    }

    /// Canonical byte encoding: one 32-byte word per field, in field order.
    pub fn encode(&self, value: &LeafValue) -> Result<Vec<u8>, EncodingError> {
        self.check(value)?;
        let mut out = Vec::with_capacity(WORD_WIDTH * value.len());
        for field in value.fields() {
            match field {
                LeafField::Address(address) => {
                    out.extend_from_slice(&[0u8; WORD_WIDTH - super::ADDRESS_WIDTH]);
                    out.extend_from_slice(address.as_bytes());
                }
                LeafField::Bytes32(bytes) => out.extend_from_slice(bytes),
            }
        }
        Ok(out)
    }

    /// Leaf hash: `keccak256(keccak256(encode(value)))`.
    pub fn leaf_hash(&self, value: &LeafValue) -> Result<Hash, EncodingError> {
        let encoded = self.encode(value)?;
        Ok(double_hash(&encoded))
    }

    /// Parses textual fields according to the descriptor.
    pub fn parse_value<S: AsRef<str>>(&self, fields: &[S]) -> Result<LeafValue, EncodingError> {
        if fields.len() != self.0.len() {
            return Err(EncodingError::ArityMismatch {
                expected: self.0.len(),
                got: fields.len(),
            });
        }
        fields
            .iter()
            .zip(&self.0)
            .map(|(text, leaf_type)| LeafField::parse_as(text.as_ref(), *leaf_type))
            .collect::<Result<Vec<_>, _>>()
            .map(LeafValue::new)
    }
}

impl Default for LeafEncoding {
    fn default() -> Self {
        Self::address_pair()
    }
}

impl From<Vec<LeafType>> for LeafEncoding {
    fn from(types: Vec<LeafType>) -> Self {
        Self(types)
    }
}

/// Hashes the canonical encoding once, then hashes the digest again.
pub fn double_hash(encoded: &[u8]) -> Hash {
    let first = keccak256(encoded);
    keccak256(first.as_bytes())
}
