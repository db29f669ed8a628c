//! Node combination rule.
//!
//! Wire-level contract: the parent of two children `a` and `b` is
//! `keccak256(min(a, b) || max(a, b))`, with `min`/`max` taken over the raw
//! bytes. Proof generation and verification apply the exact same rule, so a
//! proof never records which side a sibling was on.

use super::digest::{Hash, HASH_WIDTH};
use super::keccak::Hasher;

/// Combines two child hashes into their parent hash.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Hasher::new();
    hasher.update(low.as_bytes()).update(high.as_bytes());
    hasher.finalize()
}

/// Concatenation fed into the hash for a pair, exposed for audits and
/// cross-implementation fixtures.
pub fn pair_preimage(a: &Hash, b: &Hash) -> [u8; 2 * HASH_WIDTH] {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let mut out = [0u8; 2 * HASH_WIDTH];
    out[..HASH_WIDTH].copy_from_slice(low.as_bytes());
    out[HASH_WIDTH..].copy_from_slice(high.as_bytes());
    out
}
