use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::{MerkleError, MerkleResult};
use super::tree::MerkleTree;
use crate::hash::{hash_pair, Hash};
use crate::leaf::{LeafEncoding, LeafValue};

/// Batched inclusion proof for several leaves.
///
/// `proof_flags[k]` tells the k-th combination step where its second operand
/// comes from: `true` takes the next `proof` hash, `false` the next computed
/// hash from the queue. `leaves` are in ascending slot order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiProof {
    pub leaves: Vec<LeafValue>,
    pub proof: Vec<Hash>,
    pub proof_flags: Vec<bool>,
}

impl MultiProof {
    /// Number of combination steps the verifier will replay.
    pub fn steps(&self) -> usize {
        self.proof_flags.len()
    }
}

impl MerkleTree {
    /// Multiproof for the given leaf slots. Repeated indices are merged.
    pub fn multi_proof_for_indices(&self, indices: &[usize]) -> MerkleResult<MultiProof> {
        let mut selected = indices.to_vec();
        for &index in &selected {
            self.check_index(index)?;
        }
        selected.sort_unstable();
        selected.dedup();

        if selected.is_empty() {
            return Ok(MultiProof {
                leaves: Vec::new(),
                proof: vec![self.root()],
                proof_flags: Vec::new(),
            });
        }

        let mut known = vec![false; self.layout.node_count()];
        for &index in &selected {
            known[index] = true;
        }

        let mut proof = Vec::new();
        let mut proof_flags = Vec::new();
        for index in self.layout.leaf_count()..self.layout.node_count() {
            let [left, right] = self.layout.pair(index);
            match (known[left], known[right]) {
                (true, true) => proof_flags.push(false),
                (true, false) => {
                    proof.push(self.nodes[right]);
                    proof_flags.push(true);
                }
                (false, true) => {
                    proof.push(self.nodes[left]);
                    proof_flags.push(true);
                }
                (false, false) => continue,
            }
            known[index] = true;
        }

        let leaves = selected
            .iter()
            .map(|&index| self.values[index].clone())
            .collect();
        trace!(
            leaves = selected.len(),
            proof = proof.len(),
            flags = proof_flags.len(),
            "generated multiproof"
        );
        Ok(MultiProof {
            leaves,
            proof,
            proof_flags,
        })
    }

    /// Multiproof for the first slot of each value.
    pub fn multi_proof_for_values(&self, values: &[LeafValue]) -> MerkleResult<MultiProof> {
        let indices = values
            .iter()
            .map(|value| self.leaf_lookup(value))
            .collect::<MerkleResult<Vec<_>>>()?;
        self.multi_proof_for_indices(&indices)
    }

    pub fn verify_multi_proof(&self, multi: &MultiProof) -> MerkleResult<bool> {
        verify_multi_proof(&self.root(), &self.encoding, multi)
    }
}

/// Replays a multiproof and returns the implied root.
pub fn process_multi_proof(
    leaf_hashes: &[Hash],
    proof: &[Hash],
    proof_flags: &[bool],
) -> MerkleResult<Hash> {
    if leaf_hashes.is_empty() && proof.is_empty() {
        return Err(malformed("no leaves and no proof hashes"));
    }
    if proof_flags.len() + 1 != leaf_hashes.len() + proof.len() {
        return Err(malformed("flag count does not match leaves and proof"));
    }
    if proof_flags.is_empty() {
        return leaf_hashes
            .first()
            .or_else(|| proof.first())
            .copied()
            .ok_or_else(|| malformed("no leaves and no proof hashes"));
    }

    let mut queue: VecDeque<Hash> = leaf_hashes.iter().copied().collect();
    let mut siblings = proof.iter();
    for &from_proof in proof_flags {
        let a = queue.pop_front().ok_or_else(|| malformed("hash queue underflow"))?;
        let b = if from_proof {
            *siblings.next().ok_or_else(|| malformed("proof exhausted"))?
        } else {
            queue.pop_front().ok_or_else(|| malformed("hash queue underflow"))?
        };
        queue.push_back(hash_pair(&a, &b));
    }
    if siblings.next().is_some() {
        return Err(malformed("unconsumed proof hashes"));
    }
    queue.pop_back().ok_or_else(|| malformed("hash queue underflow"))
}

/// Stateless multiproof verification.
///
/// Structurally broken proofs are errors; a well-formed proof for another
/// root yields `Ok(false)`.
pub fn verify_multi_proof(
    root: &Hash,
    encoding: &LeafEncoding,
    multi: &MultiProof,
) -> MerkleResult<bool> {
    let leaf_hashes = multi
        .leaves
        .iter()
        .map(|leaf| encoding.leaf_hash(leaf))
        .collect::<Result<Vec<_>, _>>()?;
    let computed = process_multi_proof(&leaf_hashes, &multi.proof, &multi.proof_flags)?;
    Ok(computed == *root)
}

fn malformed(reason: &'static str) -> MerkleError {
    MerkleError::MalformedMultiProof { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::Address;

    fn leaf(i: u8) -> LeafValue {
        LeafValue::pair(Address::from_bytes([i; 20]), Address::from_bytes([0xee; 20]))
    }

    fn tree(count: u8) -> MerkleTree {
        MerkleTree::of((0..count).map(leaf)).unwrap()
    }

    #[test]
    fn empty_selection_proves_root() {
        let tree = tree(4);
        let multi = tree.multi_proof_for_indices(&[]).unwrap();
        assert!(multi.leaves.is_empty());
        assert_eq!(multi.proof, vec![tree.root()]);
        assert!(multi.proof_flags.is_empty());
        assert!(tree.verify_multi_proof(&multi).unwrap());
    }

    #[test]
    fn repeated_and_unsorted_indices_are_normalised() {
        let tree = tree(7);
        let multi = tree.multi_proof_for_indices(&[5, 1, 5, 3]).unwrap();
        assert_eq!(multi.leaves, vec![leaf(1), leaf(3), leaf(5)]);
        assert_eq!(multi, tree.multi_proof_for_indices(&[1, 3, 5]).unwrap());
        assert!(tree.verify_multi_proof(&multi).unwrap());
    }

    #[test]
    fn all_leaves_need_no_proof_hashes() {
        let tree = tree(6);
        let multi = tree.multi_proof_for_indices(&[0, 1, 2, 3, 4, 5]).unwrap();
        assert!(multi.proof.is_empty());
        assert!(multi.proof_flags.iter().all(|flag| !flag));
        assert_eq!(multi.steps(), 5);
        assert!(tree.verify_multi_proof(&multi).unwrap());
    }

    #[test]
    fn unknown_value_is_rejected() {
        let tree = tree(3);
        assert!(matches!(
            tree.multi_proof_for_values(&[leaf(1), leaf(9)]),
            Err(MerkleError::LeafNotFound)
        ));
    }

    #[test]
    fn flag_count_mismatch_is_malformed() {
        let tree = tree(5);
        let mut multi = tree.multi_proof_for_indices(&[0, 2]).unwrap();
        multi.proof_flags.push(true);
        assert!(matches!(
            tree.verify_multi_proof(&multi),
            Err(MerkleError::MalformedMultiProof { .. })
        ));
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(matches!(
            process_multi_proof(&[], &[], &[]),
            Err(MerkleError::MalformedMultiProof { .. })
        ));
    }

    #[test]
    fn exhausted_proof_is_malformed() {
        let a = Hash::from_bytes([1; 32]);
        let b = Hash::from_bytes([2; 32]);
        // counts line up but the second step asks for a missing proof hash
        let err = process_multi_proof(&[a, b], &[], &[true]).unwrap_err();
        assert!(matches!(err, MerkleError::MalformedMultiProof { .. }));
    }

    #[test]
    fn swapped_leaf_fails_without_error() {
        let tree = tree(5);
        let mut multi = tree.multi_proof_for_indices(&[1, 3]).unwrap();
        multi.leaves[0] = leaf(2);
        assert!(!tree.verify_multi_proof(&multi).unwrap());
    }
}
