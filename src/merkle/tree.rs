use std::collections::HashMap;

use tracing::{debug, warn};

use super::error::{MerkleError, MerkleResult};
use super::layout::TreeLayout;
use super::types::Node;
use crate::hash::{hash_pair, Hash};
use crate::leaf::{LeafEncoding, LeafValue};
use crate::params::TreeParams;
#[cfg(feature = "parallel")]
use crate::utils::should_parallelize;

/// Immutable, array-backed Merkle tree over typed leaf values.
///
/// The node array holds `2n - 1` hashes: leaf hashes in input order, then
/// internal nodes in creation order, with the root in the last slot (see
/// [`TreeLayout`]). Adding or removing leaves means building a new tree.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    pub(crate) encoding: LeafEncoding,
    pub(crate) values: Vec<LeafValue>,
    pub(crate) nodes: Vec<Hash>,
    pub(crate) layout: TreeLayout,
    lookup: HashMap<Hash, usize>,
}

impl MerkleTree {
    /// Builds a tree with the default parameters (identifier pairs).
    pub fn of<I>(leaves: I) -> MerkleResult<Self>
    where
        I: IntoIterator<Item = LeafValue>,
    {
        Self::build(&TreeParams::default(), leaves)
    }

    /// Hashes every leaf and combines the levels bottom-up.
    ///
    /// Duplicate values are allowed; each occurrence gets its own slot.
    pub fn build<I>(params: &TreeParams, leaves: I) -> MerkleResult<Self>
    where
        I: IntoIterator<Item = LeafValue>,
    {
        let values: Vec<LeafValue> = leaves.into_iter().collect();
        if values.is_empty() {
            return Err(MerkleError::EmptyTree);
        }
        if values.len() > params.max_leaves() as usize {
            return Err(MerkleError::TooManyLeaves {
                max: params.max_leaves(),
                got: values.len(),
            });
        }

        let encoding = params.leaf_encoding().clone();
        let leaf_hashes = hash_leaves(&encoding, &values)?;
        let layout = TreeLayout::new(values.len())?;
        let nodes = combine_levels(&layout, leaf_hashes);
        let tree = Self::assemble(encoding, values, nodes, layout);
        debug!(leaves = tree.len(), root = %tree.root(), "built merkle tree");
        Ok(tree)
    }

    /// Wraps already computed parts. `nodes` must match `layout`.
    pub(crate) fn assemble(
        encoding: LeafEncoding,
        values: Vec<LeafValue>,
        nodes: Vec<Hash>,
        layout: TreeLayout,
    ) -> Self {
        let mut lookup = HashMap::with_capacity(values.len());
        for (index, hash) in nodes[..layout.leaf_count()].iter().enumerate() {
            lookup.entry(*hash).or_insert(index);
        }
        Self {
            encoding,
            values,
            nodes,
            layout,
            lookup,
        }
    }

    pub fn root(&self) -> Hash {
        self.nodes[self.layout.root_index()]
    }

    /// Number of leaf slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Trees always hold at least one leaf.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn leaf_encoding(&self) -> &LeafEncoding {
        &self.encoding
    }

    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    /// Raw node array, root last.
    pub fn nodes(&self) -> &[Hash] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<Node> {
        let hash = *self.nodes.get(index)?;
        if self.layout.is_leaf(index) {
            Some(Node::Leaf { index, hash })
        } else {
            let children = self.layout.children(index)?;
            Some(Node::Internal { hash, children })
        }
    }

    /// Leaf values with their slot index, in construction order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &LeafValue)> + '_ {
        self.values.iter().enumerate()
    }

    pub fn value(&self, index: usize) -> MerkleResult<&LeafValue> {
        self.values.get(index).ok_or(MerkleError::IndexOutOfRange {
            index,
            leaf_count: self.len(),
        })
    }

    /// Leaf hash of `value` under this tree's encoding.
    pub fn leaf_hash(&self, value: &LeafValue) -> MerkleResult<Hash> {
        Ok(self.encoding.leaf_hash(value)?)
    }

    /// First slot holding `value`.
    pub fn leaf_lookup(&self, value: &LeafValue) -> MerkleResult<usize> {
        let hash = self.leaf_hash(value)?;
        self.lookup
            .get(&hash)
            .copied()
            .ok_or(MerkleError::LeafNotFound)
    }

    pub(crate) fn check_index(&self, index: usize) -> MerkleResult<()> {
        if index >= self.len() {
            return Err(MerkleError::IndexOutOfRange {
                index,
                leaf_count: self.len(),
            });
        }
        Ok(())
    }

    /// Recomputes every hash and compares it with the stored array.
    pub fn validate(&self) -> MerkleResult<()> {
        check_integrity(&self.encoding, &self.values, &self.nodes, &self.layout)
    }
}

fn hash_leaves(encoding: &LeafEncoding, values: &[LeafValue]) -> MerkleResult<Vec<Hash>> {
    let hash_one = |(index, value): (usize, &LeafValue)| {
        encoding
            .leaf_hash(value)
            .map_err(|source| MerkleError::InvalidLeaf { index, source })
    };

    #[cfg(feature = "parallel")]
    let hashed = if should_parallelize(values.len()) {
        use rayon::prelude::*;
        values.par_iter().enumerate().map(hash_one).collect()
    } else {
        values.iter().enumerate().map(hash_one).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let hashed = values.iter().enumerate().map(hash_one).collect();

    hashed
}

fn combine_levels(layout: &TreeLayout, leaf_hashes: Vec<Hash>) -> Vec<Hash> {
    let mut nodes = leaf_hashes;
    nodes.reserve(layout.node_count() - nodes.len());
    for level in layout.levels() {
        let current = &nodes;
        let combine = |index: usize| {
            let [left, right] = layout.pair(index);
            hash_pair(&current[left], &current[right])
        };

        #[cfg(feature = "parallel")]
        let next: Vec<Hash> = if should_parallelize(level.len()) {
            use rayon::prelude::*;
            level.clone().into_par_iter().map(combine).collect()
        } else {
            level.clone().map(combine).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let next: Vec<Hash> = level.clone().map(combine).collect();

        nodes.extend(next);
    }
    nodes
}

/// Checks stored hashes against a full recomputation.
pub(crate) fn check_integrity(
    encoding: &LeafEncoding,
    values: &[LeafValue],
    nodes: &[Hash],
    layout: &TreeLayout,
) -> MerkleResult<()> {
    if nodes.len() != layout.node_count() || values.len() != layout.leaf_count() {
        return Err(MerkleError::Integrity {
            node: nodes.len(),
            reason: "node array does not match leaf count",
        });
    }
    for (index, value) in values.iter().enumerate() {
        let expected = encoding
            .leaf_hash(value)
            .map_err(|source| MerkleError::InvalidLeaf { index, source })?;
        if nodes[index] != expected {
            warn!(node = index, "stored leaf hash does not match leaf value");
            return Err(MerkleError::Integrity {
                node: index,
                reason: "leaf hash does not match leaf value",
            });
        }
    }
    for index in layout.leaf_count()..layout.node_count() {
        let [left, right] = layout.pair(index);
        if nodes[index] != hash_pair(&nodes[left], &nodes[right]) {
            warn!(node = index, "stored node hash does not match its children");
            return Err(MerkleError::Integrity {
                node: index,
                reason: "node hash does not match its children",
            });
        }
    }
    Ok(())
}
