
use _fixtures::{five_pair_tree, node};
use pair_merkle::ser::{decode_multi_proof, decode_proof, encode_multi_proof, encode_proof, SerKind};
use pair_merkle::{MerkleError, SerError};

fn hex_bytes(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[test]
fn proof_bytes_snapshot() {
    let proof = five_pair_tree().proof_for_index(4).unwrap();
    let bytes = encode_proof(&proof).unwrap();
    let expected = format!(
        "02000000{}{}",
        hex::encode(node(5).as_bytes()),
        hex::encode(node(6).as_bytes())
    );
    assert_eq!(hex_bytes(&bytes), expected);
    assert_eq!(decode_proof(&bytes).unwrap(), proof);
}

#[test]
fn decoded_multiproof_still_verifies() {
    let tree = five_pair_tree();
    let multi = tree.multi_proof_for_indices(&[0, 2, 4]).unwrap();
    let bytes = encode_multi_proof(&multi).unwrap();
    // 3 leaves of 2 address fields, 2 hashes, 4 flags
    assert_eq!(bytes.len(), 4 + 3 * (1 + 2 * 21) + 4 + 2 * 32 + 4 + 4);
    let decoded = decode_multi_proof(&bytes).unwrap();
    assert!(tree.verify_multi_proof(&decoded).unwrap());
}

#[test]
fn truncated_multiproof_reports_section() {
    let multi = five_pair_tree().multi_proof_for_indices(&[1, 3]).unwrap();
    let bytes = encode_multi_proof(&multi).unwrap();
    for cut in [1usize, 10, bytes.len() - 1] {
        let err = decode_multi_proof(&bytes[..cut]).unwrap_err();
        assert!(matches!(err, SerError::UnexpectedEnd { .. }), "cut at {cut}: {err}");
    }
    let err = decode_multi_proof(&bytes[..bytes.len() - 2]).unwrap_err();
    assert_eq!(err.kind(), SerKind::MultiProof);
}

#[test]
fn serialization_errors_convert_into_merkle_errors() {
    let err: MerkleError = decode_proof(&[0xff]).unwrap_err().into();
    assert!(matches!(err, MerkleError::Serialization(_)));
}
