use core::fmt::Write;

use super::tree::MerkleTree;

impl MerkleTree {
    /// Draws the tree root first, one `{slot}) {hash}` line per node.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // (slot, branch flags from the root; `true` marks a left child)
        let mut stack = vec![(self.layout.root_index(), Vec::<bool>::new())];
        while let Some((index, path)) = stack.pop() {
            if !out.is_empty() {
                out.push('\n');
            }
            if let Some((last, ancestors)) = path.split_last() {
                for &left in ancestors {
                    out.push_str(if left { "│  " } else { "   " });
                }
                out.push_str(if *last { "├─ " } else { "└─ " });
            }
            let _ = write!(out, "{index}) {}", self.nodes[index]);

            if let Some([left, right]) = self.layout.children(index) {
                let mut right_path = path.clone();
                right_path.push(false);
                let mut left_path = path;
                left_path.push(true);
                stack.push((right, right_path));
                stack.push((left, left_path));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::leaf::{Address, LeafValue};
    use crate::merkle::MerkleTree;

    #[test]
    fn single_leaf_renders_one_line() {
        let tree = MerkleTree::of([LeafValue::pair(Address::ZERO, Address::ZERO)]).unwrap();
        let rendered = tree.render();
        assert_eq!(rendered, format!("0) {}", tree.root()));
    }

    #[test]
    fn every_slot_appears_once() {
        let leaves = (0..6u8).map(|i| LeafValue::pair(Address::from_bytes([i; 20]), Address::ZERO));
        let tree = MerkleTree::of(leaves).unwrap();
        let rendered = tree.render();
        assert_eq!(rendered.lines().count(), tree.nodes().len());
        assert!(rendered.starts_with(&format!("10) {}", tree.root())));
    }
}
