//! Merkle commitments over pairs of 20-byte identifiers.
//!
//! The crate builds an array-backed binary Merkle tree over typed leaf
//! values, produces single-leaf proofs and compact multiproofs, and verifies
//! both either against a materialized tree or statelessly from a root.
//!
//! ```
//! use pair_merkle::{Address, LeafValue, MerkleTree};
//!
//! let dai: Address = "0x6b175474e89094c44da98b954eedeac495271d0f".parse().unwrap();
//! let usdc: Address = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".parse().unwrap();
//! let weth: Address = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".parse().unwrap();
//!
//! let tree = MerkleTree::of([LeafValue::pair(dai, usdc), LeafValue::pair(usdc, weth)]).unwrap();
//! let proof = tree.proof_for_index(1).unwrap();
//! assert!(pair_merkle::verify(
//!     &tree.root(),
//!     tree.leaf_encoding(),
//!     &LeafValue::pair(usdc, weth),
//!     &proof,
//! )
//! .unwrap());
//! ```
//!
//! Hashing is Keccak-256 throughout. See [`leaf`] for the leaf encoding and
//! [`merkle`] for the tree shape and proof formats.

pub mod hash;
pub mod leaf;
pub mod merkle;
pub mod params;
pub mod ser;
pub mod utils;

pub use hash::{hash_pair, Hash};
pub use leaf::{Address, EncodingError, LeafEncoding, LeafField, LeafType, LeafValue};
pub use merkle::{
    process_multi_proof, process_proof, verify, verify_multi_proof, MerkleError, MerkleResult,
    MerkleTree, MultiProof, Node, Proof, TreeLayout,
};
pub use params::{BuiltinProfile, LoadMode, TreeParams, TreeParamsBuilder};
pub use ser::{SerError, TreeDump};
