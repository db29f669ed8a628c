//! Array-backed binary Merkle tree with sorted-pair combination.
//!
//! The module fixes the following protocol knobs:
//!
//! * **Leaf hashing:** each leaf is encoded with its [`LeafEncoding`] into
//!   32-byte words and hashed twice with Keccak-256
//!   ([`crate::leaf::double_hash`]).
//! * **Node combination:** `hash_pair(a, b) = keccak(min(a, b) || max(a, b))`,
//!   so proofs carry no left/right markers.
//! * **Shape:** levels are paired left to right; an odd trailing node moves
//!   to the front of the next level unchanged. No padding, no duplication.
//!   See [`TreeLayout`].
//! * **Multiproofs:** flagged sibling lists replayed through a FIFO queue
//!   ([`process_multi_proof`]).
//!
//! [`LeafEncoding`]: crate::leaf::LeafEncoding

mod error;
mod layout;
mod multiproof;
mod proof;
mod render;
mod tree;
mod types;

pub use error::{MerkleError, MerkleResult};
pub use layout::TreeLayout;
pub use multiproof::{process_multi_proof, verify_multi_proof, MultiProof};
pub use proof::{process_proof, verify};
pub use tree::MerkleTree;
pub use types::{Node, Proof};

pub(crate) use tree::check_integrity;
