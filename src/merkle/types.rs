use serde::{Deserialize, Serialize};

use crate::hash::Hash;

/// View of one slot of the node array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Leaf slot, tagged with the index of the leaf value it commits to.
    Leaf { index: usize, hash: Hash },
    /// Internal slot combining exactly two children.
    Internal { hash: Hash, children: [usize; 2] },
}

impl Node {
    pub fn hash(&self) -> &Hash {
        match self {
            Node::Leaf { hash, .. } | Node::Internal { hash, .. } => hash,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Ordered sibling hashes from a leaf to the root, leaf-adjacent first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof(Vec<Hash>);

impl Proof {
    pub fn new(hashes: Vec<Hash>) -> Self {
        Self(hashes)
    }

    pub fn hashes(&self) -> &[Hash] {
        &self.0
    }

    pub fn hashes_mut(&mut self) -> &mut [Hash] {
        &mut self.0
    }

    pub fn into_hashes(self) -> Vec<Hash> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hash> {
        self.0.iter()
    }
}

impl From<Vec<Hash>> for Proof {
    fn from(hashes: Vec<Hash>) -> Self {
        Self(hashes)
    }
}

impl AsRef<[Hash]> for Proof {
    fn as_ref(&self) -> &[Hash] {
        &self.0
    }
}
