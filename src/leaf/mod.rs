//! Typed leaf values and their canonical encoding.
//!
//! A leaf is an ordered tuple of typed fields ([`LeafValue`]) interpreted
//! through an encoding descriptor ([`LeafEncoding`]). The canonical encoding
//! is one 32-byte word per field in field order (`address` left-padded with
//! zeros, `bytes32` verbatim), and the leaf hash is
//! `keccak256(keccak256(encoding))`.
//!
//! Hashing twice keeps leaf hashes (hash of a 32-byte digest) apart from
//! internal node hashes (hash of a 64-byte concatenation).

mod address;
mod encoding;
mod value;

pub use address::{Address, ADDRESS_WIDTH};
pub use encoding::{double_hash, LeafEncoding, LeafType, WORD_WIDTH};
pub use value::{LeafField, LeafValue};

/// Failure to bring a leaf into its canonical shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("leaf has {got} fields, encoding declares {expected}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("field {position} is {got}, encoding declares {expected}")]
    TypeMismatch {
        position: usize,
        expected: LeafType,
        got: LeafType,
    },
    #[error("invalid hex field: {0}")]
    InvalidHex(String),
    #[error("field must be {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
    #[error("unknown leaf type tag `{0}`")]
    UnknownType(String),
}
