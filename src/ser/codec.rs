//! Compact binary framing for proofs.
//!
//! | Object | Layout |
//! |--------|--------|
//! | `Proof` | `u32` hash count, then 32 bytes per hash |
//! | `MultiProof` | `u32` leaf count and leaves, `u32` hash count and hashes, `u32` flag count and one byte per flag |
//! | leaf | `u8` field count, then per field a `u8` type code (`1` address, `2` bytes32) and its raw bytes |
//!
//! All integers are little-endian. Decoders reject trailing bytes.

use super::collections::{read_vec, write_vec};
use super::cursor::ByteReader;
use super::digest::{read_hash, write_hash};
use super::error::{SerError, SerKind, SerResult};
use super::ints::{read_bool, read_u8, write_bool, write_u8};
use crate::hash::HASH_WIDTH;
use crate::leaf::{Address, LeafField, LeafType, LeafValue, ADDRESS_WIDTH, WORD_WIDTH};
use crate::merkle::{MultiProof, Proof};

pub fn encode_proof(proof: &Proof) -> SerResult<Vec<u8>> {
    let mut out = Vec::with_capacity(4 + proof.len() * HASH_WIDTH);
    write_vec(&mut out, proof.hashes(), SerKind::Proof, "hashes", |out, hash| {
        write_hash(out, hash);
        Ok(())
    })?;
    Ok(out)
}

pub fn decode_proof(bytes: &[u8]) -> SerResult<Proof> {
    let mut cursor = ByteReader::new(bytes);
    let hashes = read_vec(&mut cursor, SerKind::Proof, "hashes", |cursor, _| {
        read_hash(cursor, SerKind::Proof, "hash")
    })?;
    cursor.ensure_consumed(SerKind::Proof)?;
    Ok(Proof::new(hashes))
}

pub fn encode_multi_proof(multi: &MultiProof) -> SerResult<Vec<u8>> {
    let mut out = Vec::new();
    write_vec(&mut out, &multi.leaves, SerKind::MultiProof, "leaves", write_leaf)?;
    write_vec(&mut out, &multi.proof, SerKind::MultiProof, "proof", |out, hash| {
        write_hash(out, hash);
        Ok(())
    })?;
    write_vec(
        &mut out,
        &multi.proof_flags,
        SerKind::MultiProof,
        "proof_flags",
        |out, flag| {
            write_bool(out, *flag);
            Ok(())
        },
    )?;
    Ok(out)
}

pub fn decode_multi_proof(bytes: &[u8]) -> SerResult<MultiProof> {
    let mut cursor = ByteReader::new(bytes);
    let leaves = read_vec(&mut cursor, SerKind::MultiProof, "leaves", |cursor, _| {
        read_leaf(cursor)
    })?;
    let proof = read_vec(&mut cursor, SerKind::MultiProof, "proof", |cursor, _| {
        read_hash(cursor, SerKind::MultiProof, "proof")
    })?;
    let proof_flags = read_vec(&mut cursor, SerKind::MultiProof, "proof_flags", |cursor, _| {
        read_bool(cursor, SerKind::MultiProof, "proof_flags")
    })?;
    cursor.ensure_consumed(SerKind::MultiProof)?;
    Ok(MultiProof {
        leaves,
        proof,
        proof_flags,
    })
}

fn write_leaf(out: &mut Vec<u8>, leaf: &LeafValue) -> SerResult<()> {
    let count =
        u8::try_from(leaf.len()).map_err(|_| SerError::invalid_length(SerKind::Leaf, "fields"))?;
    write_u8(out, count);
    for field in leaf.fields() {
        write_u8(out, field.leaf_type().code());
        match field {
            LeafField::Address(address) => out.extend_from_slice(address.as_bytes()),
            LeafField::Bytes32(bytes) => out.extend_from_slice(bytes),
        }
    }
    Ok(())
}

fn read_leaf(cursor: &mut ByteReader<'_>) -> SerResult<LeafValue> {
    let count = read_u8(cursor, SerKind::Leaf, "fields")?;
    let mut fields = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let code = read_u8(cursor, SerKind::Leaf, "type")?;
        let field = match LeafType::from_code(code) {
            Some(LeafType::Address) => LeafField::Address(Address::from_bytes(
                cursor.read_array::<ADDRESS_WIDTH>(SerKind::Leaf, "address")?,
            )),
            Some(LeafType::Bytes32) => {
                LeafField::Bytes32(cursor.read_array::<WORD_WIDTH>(SerKind::Leaf, "bytes32")?)
            }
            None => return Err(SerError::invalid_value(SerKind::Leaf, "type")),
        };
        fields.push(field);
    }
    Ok(LeafValue::new(fields))
}
