use core::ops::Range;

use super::error::{MerkleError, MerkleResult};

const NO_PARENT: usize = usize::MAX;

/// Index tables describing the shape of a tree with a given leaf count.
///
/// The shape depends on nothing but the leaf count, so it is recomputed on
/// load instead of being serialized. Slots `0..n` are the leaves in input
/// order; internal nodes follow in creation order and the root is the last
/// slot (`2n - 2`).
///
/// Levels are paired left to right. When a level has an odd number of nodes,
/// its last node is carried to the *front* of the next level unchanged. Every
/// non-root node therefore has exactly one parent and one sibling, and the
/// order in which nodes are consumed as children equals their slot order.
/// Multiproof replay depends on that property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLayout {
    leaf_count: usize,
    parents: Vec<usize>,
    children: Vec<[usize; 2]>,
    levels: Vec<Range<usize>>,
}

impl TreeLayout {
    pub fn new(leaf_count: usize) -> MerkleResult<Self> {
        if leaf_count == 0 {
            return Err(MerkleError::EmptyTree);
        }
        let node_count = 2 * leaf_count - 1;
        let mut parents = vec![NO_PARENT; node_count];
        let mut children = Vec::with_capacity(leaf_count - 1);
        let mut levels = Vec::new();

        let mut level: Vec<usize> = (0..leaf_count).collect();
        let mut next_index = leaf_count;
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len() / 2 + 1);
            let paired = if level.len() % 2 == 1 {
                next.push(level[level.len() - 1]);
                &level[..level.len() - 1]
            } else {
                &level[..]
            };
            let start = next_index;
            for pair in paired.chunks_exact(2) {
                parents[pair[0]] = next_index;
                parents[pair[1]] = next_index;
                children.push([pair[0], pair[1]]);
                next.push(next_index);
                next_index += 1;
            }
            levels.push(start..next_index);
            level = next;
        }

        Ok(Self {
            leaf_count,
            parents,
            children,
            levels,
        })
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Always `2 * leaf_count - 1`.
    pub fn node_count(&self) -> usize {
        self.parents.len()
    }

    pub fn root_index(&self) -> usize {
        self.node_count() - 1
    }

    pub fn is_leaf(&self, index: usize) -> bool {
        index < self.leaf_count
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        match self.parents.get(index) {
            Some(&NO_PARENT) | None => None,
            Some(&parent) => Some(parent),
        }
    }

    /// Children of an internal node, in pairing order.
    pub fn children(&self, index: usize) -> Option<[usize; 2]> {
        let offset = index.checked_sub(self.leaf_count)?;
        self.children.get(offset).copied()
    }

    /// Children of an internal slot. Panics on leaf slots.
    pub(crate) fn pair(&self, index: usize) -> [usize; 2] {
        self.children[index - self.leaf_count]
    }

    pub fn sibling(&self, index: usize) -> Option<usize> {
        let [left, right] = self.children(self.parent(index)?)?;
        Some(if left == index { right } else { left })
    }

    /// Slot ranges of the internal nodes created at each level, bottom-up.
    pub fn levels(&self) -> &[Range<usize>] {
        &self.levels
    }

    /// Number of combination steps between a node and the root.
    pub fn depth(&self, mut index: usize) -> usize {
        let mut depth = 0;
        while let Some(parent) = self.parent(index) {
            index = parent;
            depth += 1;
        }
        depth
    }
}
