use crate::leaf::EncodingError;
use crate::params::ParamsError;
use crate::ser::SerError;

/// Errors emitted by the Merkle layer.
///
/// A proof that simply does not match a root is not an error: verification
/// returns `Ok(false)` for that case. Variants here cover inputs that cannot be
/// processed at all.
#[derive(Debug, thiserror::Error)]
pub enum MerkleError {
    /// A leaf value does not fit the leaf encoding.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// A leaf supplied at build time does not fit the leaf encoding.
    #[error("leaf {index}: {source}")]
    InvalidLeaf {
        index: usize,
        #[source]
        source: EncodingError,
    },
    #[error("a tree needs at least one leaf")]
    EmptyTree,
    #[error("{got} leaves exceed the configured maximum of {max}")]
    TooManyLeaves { max: u32, got: usize },
    #[error("leaf not found in tree")]
    LeafNotFound,
    #[error("leaf index {index} out of range (tree has {leaf_count} leaves)")]
    IndexOutOfRange { index: usize, leaf_count: usize },
    /// Stored hashes disagree with the recomputed tree.
    #[error("integrity check failed at node {node}: {reason}")]
    Integrity { node: usize, reason: &'static str },
    /// Multiproof components have inconsistent shapes.
    #[error("malformed multiproof: {reason}")]
    MalformedMultiProof { reason: &'static str },
    #[error("unsupported tree format `{0}`")]
    UnsupportedFormat(String),
    /// A dump is structurally inconsistent (lengths, encodings).
    #[error("invalid tree dump: {reason}")]
    InvalidDump { reason: String },
    #[error(transparent)]
    Serialization(#[from] SerError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// Result alias used throughout the crate.
pub type MerkleResult<T> = core::result::Result<T, MerkleError>;
