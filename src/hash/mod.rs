//! Hash primitive and node combiner.
//!
//! * [`keccak256`] / [`Hasher`] – Keccak-256 (original padding), output width
//!   [`HASH_WIDTH`] = 32 bytes.
//! * [`hash_pair`] – order-independent combination of two child hashes.
//! * [`Hash`] – digest newtype with a `0x`-prefixed hex text form used by
//!   every serialized artefact.

mod combine;
mod digest;
mod keccak;

pub use combine::{hash_pair, pair_preimage};
pub use digest::{Hash, HashParseError, HASH_WIDTH};
pub use keccak::{keccak256, Hasher};
