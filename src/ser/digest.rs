use super::cursor::ByteReader;
use super::error::{SerKind, SerResult};
use crate::hash::{Hash, HASH_WIDTH};

/// Writes a raw 32-byte hash to the output buffer.
pub fn write_hash(out: &mut Vec<u8>, hash: &Hash) {
    out.extend_from_slice(hash.as_bytes());
}

pub fn read_hash(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<Hash> {
    cursor
        .read_array::<HASH_WIDTH>(kind, field)
        .map(Hash::from_bytes)
}
