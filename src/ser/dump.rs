use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hash::Hash;
use crate::leaf::LeafEncoding;
use crate::merkle::{check_integrity, MerkleError, MerkleResult, MerkleTree, TreeLayout};
use crate::params::{LoadMode, TreeParams, DUMP_FORMAT};

/// Portable form of a [`MerkleTree`].
///
/// ```json
/// {
///   "format": "standard-v1",
///   "treeHashes": ["0x…", …],
///   "leafValues": [["0x…", "0x…"], …],
///   "leafEncoding": ["address", "address"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDump {
    pub format: String,
    pub tree_hashes: Vec<Hash>,
    pub leaf_values: Vec<Vec<String>>,
    pub leaf_encoding: LeafEncoding,
}

impl MerkleTree {
    pub fn dump(&self) -> TreeDump {
        TreeDump {
            format: DUMP_FORMAT.to_owned(),
            tree_hashes: self.nodes.clone(),
            leaf_values: self.values.iter().map(|value| value.to_strings()).collect(),
            leaf_encoding: self.encoding.clone(),
        }
    }

    /// Rebuilds a tree from a dump.
    ///
    /// Both modes check the format tag, the array lengths and that every leaf
    /// value parses under the stored encoding. [`LoadMode::Strict`] also
    /// recomputes every hash; [`LoadMode::Trusted`] takes them as stored.
    pub fn load(dump: TreeDump, mode: LoadMode) -> MerkleResult<Self> {
        if dump.format != DUMP_FORMAT {
            return Err(MerkleError::UnsupportedFormat(dump.format));
        }
        if dump.leaf_encoding.is_empty() {
            return Err(MerkleError::InvalidDump {
                reason: "leaf encoding is empty".to_owned(),
            });
        }
        if dump.leaf_values.is_empty() {
            return Err(MerkleError::EmptyTree);
        }
        let leaf_count = dump.leaf_values.len();
        if dump.tree_hashes.len() != 2 * leaf_count - 1 {
            return Err(MerkleError::InvalidDump {
                reason: format!(
                    "{} tree hashes for {} leaves, expected {}",
                    dump.tree_hashes.len(),
                    leaf_count,
                    2 * leaf_count - 1
                ),
            });
        }

        let values = dump
            .leaf_values
            .iter()
            .enumerate()
            .map(|(index, fields)| {
                dump.leaf_encoding
                    .parse_value(fields.as_slice())
                    .map_err(|source| MerkleError::InvalidLeaf { index, source })
            })
            .collect::<MerkleResult<Vec<_>>>()?;
        let layout = TreeLayout::new(leaf_count)?;
        if mode == LoadMode::Strict {
            check_integrity(&dump.leaf_encoding, &values, &dump.tree_hashes, &layout)?;
        }

        let tree = MerkleTree::assemble(dump.leaf_encoding, values, dump.tree_hashes, layout);
        debug!(leaves = leaf_count, root = %tree.root(), ?mode, "loaded merkle tree");
        Ok(tree)
    }

    /// Loads under `params`: its load mode, its leaf limit, and its encoding,
    /// which must equal the stored one.
    pub fn load_with(params: &TreeParams, dump: TreeDump) -> MerkleResult<Self> {
        if dump.leaf_values.len() > params.max_leaves() as usize {
            return Err(MerkleError::TooManyLeaves {
                max: params.max_leaves(),
                got: dump.leaf_values.len(),
            });
        }
        if dump.leaf_encoding != *params.leaf_encoding() {
            return Err(MerkleError::InvalidDump {
                reason: format!(
                    "stored leaf encoding {:?} differs from configured {:?}",
                    dump.leaf_encoding.types(),
                    params.leaf_encoding().types()
                ),
            });
        }
        Self::load(dump, params.load_mode())
    }

    /// Pretty-printed JSON dump.
    pub fn to_json(&self) -> MerkleResult<String> {
        Ok(serde_json::to_string_pretty(&self.dump())?)
    }

    pub fn from_json(json: &str, mode: LoadMode) -> MerkleResult<Self> {
        let dump: TreeDump = serde_json::from_str(json)?;
        Self::load(dump, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::{Address, LeafValue};

    fn tree() -> MerkleTree {
        MerkleTree::of((1..=3u8).map(|i| {
            LeafValue::pair(Address::from_bytes([i; 20]), Address::from_bytes([0; 20]))
        }))
        .unwrap()
    }

    #[test]
    fn unknown_format_is_rejected() {
        let mut dump = tree().dump();
        dump.format = "standard-v2".into();
        assert!(matches!(
            MerkleTree::load(dump, LoadMode::Trusted),
            Err(MerkleError::UnsupportedFormat(tag)) if tag == "standard-v2"
        ));
    }

    #[test]
    fn hash_count_must_match_leaves() {
        let mut dump = tree().dump();
        dump.tree_hashes.pop();
        assert!(matches!(
            MerkleTree::load(dump, LoadMode::Trusted),
            Err(MerkleError::InvalidDump { .. })
        ));
    }

    #[test]
    fn trusted_load_keeps_stored_hashes() {
        let mut dump = tree().dump();
        let last = dump.tree_hashes.len() - 1;
        dump.tree_hashes[last] = Hash::ZERO;
        let loaded = MerkleTree::load(dump.clone(), LoadMode::Trusted).unwrap();
        assert_eq!(loaded.root(), Hash::ZERO);
        assert!(matches!(
            MerkleTree::load(dump, LoadMode::Strict),
            Err(MerkleError::Integrity { node: 4, .. })
        ));
    }

    #[test]
    fn leaf_values_are_typed_by_encoding() {
        let mut dump = tree().dump();
        dump.leaf_values[1][0] = "0x1234".into();
        assert!(matches!(
            MerkleTree::load(dump, LoadMode::Trusted),
            Err(MerkleError::InvalidLeaf { index: 1, .. })
        ));
    }
}
