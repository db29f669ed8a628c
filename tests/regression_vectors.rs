
use _fixtures::{five_pair_tree, five_pairs, hash, node, pair, FIVE_PAIR_NODES, FIVE_PAIR_ROOT};
use _fixtures::{DAI, USDC, WETH};
use pair_merkle::{verify, LeafEncoding, MerkleTree, MultiProof, Node};

#[test]
fn leaf_hash_matches_recorded_vector() {
    let encoding = LeafEncoding::address_pair();
    assert_eq!(
        encoding.leaf_hash(&pair(DAI, USDC)).unwrap(),
        hash("0x9104dda3944cefe37b8192b14eb6b242c03379e064ddba755801f80f02a317ef")
    );
}

#[test]
fn five_pair_node_array_is_stable() {
    let tree = five_pair_tree();
    let expected: Vec<_> = FIVE_PAIR_NODES.iter().map(|text| hash(text)).collect();
    assert_eq!(tree.nodes(), expected.as_slice());
    assert_eq!(tree.root(), hash(FIVE_PAIR_ROOT));
    assert_eq!(tree.root().to_hex(), FIVE_PAIR_ROOT);
}

#[test]
fn five_pair_shape() {
    let tree = five_pair_tree();
    let internal = |slot| match tree.node(slot) {
        Some(Node::Internal { children, .. }) => children,
        other => panic!("slot {slot} is {other:?}"),
    };
    assert_eq!(internal(5), [0, 1]);
    assert_eq!(internal(6), [2, 3]);
    assert_eq!(internal(7), [4, 5]);
    assert_eq!(internal(8), [6, 7]);
    assert_eq!(tree.node(4), Some(Node::Leaf { index: 4, hash: node(4) }));
}

#[test]
fn first_leaf_proof_is_stable() {
    let tree = five_pair_tree();
    let proof = tree.proof_for_index(0).unwrap();
    assert_eq!(proof.hashes(), &[node(1), node(4), node(6)]);
    assert_eq!(tree.proof_for_value(&pair(DAI, USDC)).unwrap(), proof);
    assert!(verify(&hash(FIVE_PAIR_ROOT), &LeafEncoding::address_pair(), &pair(DAI, USDC), &proof).unwrap());
}

#[test]
fn last_leaf_skips_a_level() {
    let tree = five_pair_tree();
    let proof = tree.proof_for_index(4).unwrap();
    assert_eq!(proof.hashes(), &[node(5), node(6)]);
}

fn expect_multi(indices: &[usize], proof_slots: &[usize], flags: &[bool]) {
    let tree = five_pair_tree();
    let multi = tree.multi_proof_for_indices(indices).unwrap();
    let leaves = five_pairs();
    assert_eq!(
        multi,
        MultiProof {
            leaves: indices.iter().map(|&i| leaves[i].clone()).collect(),
            proof: proof_slots.iter().map(|&slot| node(slot)).collect(),
            proof_flags: flags.to_vec(),
        },
        "selection {indices:?}"
    );
    assert!(tree.verify_multi_proof(&multi).unwrap());
}

#[test]
fn multiproof_vectors() {
    expect_multi(&[0, 1, 2], &[3, 4], &[false, true, true, false]);
    expect_multi(&[0, 2, 4], &[1, 3], &[true, true, false, false]);
    expect_multi(&[1, 3], &[0, 2, 4], &[true, true, true, false]);
    expect_multi(&[0], &[1, 4, 6], &[true, true, true]);
    expect_multi(&[4], &[5, 6], &[true, true]);
}

#[test]
fn multiproof_by_value_matches_by_index() {
    let tree = five_pair_tree();
    let by_value = tree
        .multi_proof_for_values(&[pair(DAI, WETH), pair(DAI, USDC), pair(USDC, WETH)])
        .unwrap();
    assert_eq!(by_value, tree.multi_proof_for_indices(&[0, 1, 2]).unwrap());
}

#[test]
fn duplicate_leaf_changes_root_but_keeps_slots_apart() {
    let mut leaves = five_pairs();
    leaves.push(pair(DAI, USDC));
    let tree = MerkleTree::of(leaves).unwrap();
    assert_eq!(
        tree.root(),
        hash("0x09b8003c5b3ab22efccf4d202c0b6f19e9cb8300468d5acf24a52870f6de21c1")
    );
    assert_eq!(tree.nodes()[0], tree.nodes()[5]);
    let first = tree.proof_for_index(0).unwrap();
    let second = tree.proof_for_index(5).unwrap();
    assert_ne!(first, second);
    assert!(tree.verify_index(0, &first).unwrap());
    assert!(tree.verify_index(5, &second).unwrap());
    assert_eq!(tree.proof_for_value(&pair(DAI, USDC)).unwrap(), first);
}

#[test]
fn single_pair_root_is_its_leaf_hash() {
    let tree = MerkleTree::of([pair(DAI, USDC)]).unwrap();
    assert_eq!(tree.root(), node(0));
    assert!(tree.proof_for_index(0).unwrap().is_empty());
}
