use super::error::MerkleResult;
use super::tree::MerkleTree;
use super::types::Proof;
use crate::hash::{hash_pair, Hash};
use crate::leaf::{LeafEncoding, LeafValue};

impl MerkleTree {
    /// Sibling path from leaf slot `index` to the root.
    pub fn proof_for_index(&self, index: usize) -> MerkleResult<Proof> {
        self.check_index(index)?;
        let mut path = Vec::with_capacity(self.layout.depth(index));
        let mut current = index;
        while let Some(sibling) = self.layout.sibling(current) {
            path.push(self.nodes[sibling]);
            // a node with a sibling always has a parent
            current = match self.layout.parent(current) {
                Some(parent) => parent,
                None => break,
            };
        }
        Ok(Proof::new(path))
    }

    /// Proof for the first slot holding `value`.
    pub fn proof_for_value(&self, value: &LeafValue) -> MerkleResult<Proof> {
        let index = self.leaf_lookup(value)?;
        self.proof_for_index(index)
    }

    /// Checks the proof of slot `index` against this tree's root.
    pub fn verify_index(&self, index: usize, proof: &Proof) -> MerkleResult<bool> {
        self.check_index(index)?;
        Ok(process_proof(&self.nodes[index], proof) == self.root())
    }

    /// Checks `value` with `proof` against this tree's root.
    ///
    /// The value does not need to be a member of the tree.
    pub fn verify_value(&self, value: &LeafValue, proof: &Proof) -> MerkleResult<bool> {
        verify(&self.root(), &self.encoding, value, proof)
    }
}

/// Folds `proof` into `leaf`, returning the implied root.
pub fn process_proof(leaf: &Hash, proof: &Proof) -> Hash {
    proof
        .iter()
        .fold(*leaf, |current, sibling| hash_pair(&current, sibling))
}

/// Stateless single-leaf verification.
///
/// Fails only when `leaf` does not fit `encoding`; a proof for another root
/// yields `Ok(false)`.
pub fn verify(
    root: &Hash,
    encoding: &LeafEncoding,
    leaf: &LeafValue,
    proof: &Proof,
) -> MerkleResult<bool> {
    let leaf_hash = encoding.leaf_hash(leaf)?;
    Ok(process_proof(&leaf_hash, proof) == *root)
}
