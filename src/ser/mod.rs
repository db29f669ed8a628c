//! Serialization of trees and proofs.
//!
//! Trees travel as JSON ([`TreeDump`]). Proofs and multiproofs also have a
//! compact little-endian binary form read through a bounds-checked
//! [`ByteReader`].

mod codec;
mod collections;
mod cursor;
mod digest;
mod dump;
mod error;
mod ints;

pub use codec::{decode_multi_proof, decode_proof, encode_multi_proof, encode_proof};
pub use collections::{read_vec, write_vec};
pub use cursor::ByteReader;
pub use digest::{read_hash, write_hash};
pub use dump::TreeDump;
pub use error::{SerError, SerKind, SerResult};
pub use ints::{ensure_u32, read_bool, read_u32, read_u8, write_bool, write_u32, write_u8};
