//! Fixed SHA-256 vectors and tamper checks

use hex_literal::hex;

use crate::{sha256, MerkleTree, Proof, Sibling, Side};

const TWO_LEAF_ROOT: [u8; 32] =
    hex!("7305db9b2abccd706c256db3d97e5ff48d677cfe4d3a5904afb7da0e3950e1e2");
const THREE_LEAF_ROOT: [u8; 32] =
    hex!("ea150034b1804b2bddd35b65d55d675252f0d9ef4ba6d47f8f457895283eabdb");
const HELLO: [u8; 32] = hex!("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824");
const WORLD: [u8; 32] = hex!("486ea46224d1bb4fb680f34f7c9ad96a8f24ec88be73ea8e5a6c65260e9cb8a7");
const FOO: [u8; 32] = hex!("2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae");

fn hashed_leaves(words: &[&str]) -> Vec<Vec<u8>> {
    words.iter().map(|word| sha256(word.as_bytes())).collect()
}

#[test]
fn test_two_leaf_layers() {
    let tree = MerkleTree::new(hashed_leaves(&["hello", "world"]), sha256).unwrap();
    assert_eq!(tree.root(), TWO_LEAF_ROOT.as_slice());
    assert_eq!(
        tree.pretty_layers(),
        vec![
            vec![hex::encode(HELLO), hex::encode(WORLD)],
            vec![hex::encode(TWO_LEAF_ROOT)],
        ]
    );
    assert_eq!(tree.pretty_root(), hex::encode(TWO_LEAF_ROOT));
}

#[test]
fn test_display_renders_hex_layers_as_json() {
    let tree = MerkleTree::new(hashed_leaves(&["hello", "world"]), sha256).unwrap();
    assert_eq!(
        tree.to_string(),
        "[[\"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\",\
\"486ea46224d1bb4fb680f34f7c9ad96a8f24ec88be73ea8e5a6c65260e9cb8a7\"],\
[\"7305db9b2abccd706c256db3d97e5ff48d677cfe4d3a5904afb7da0e3950e1e2\"]]"
    );
}

#[test]
fn test_two_leaf_proofs() {
    let leaves = hashed_leaves(&["hello", "world"]);
    let tree = MerkleTree::new(leaves.clone(), sha256).unwrap();
    assert_eq!(
        tree.proof(&leaves[0]),
        Proof::new(
            HELLO.to_vec(),
            vec![Sibling::new(WORLD.to_vec(), Side::Right)],
            TWO_LEAF_ROOT.to_vec(),
        )
    );
    assert_eq!(
        tree.proof(&leaves[1]),
        Proof::new(
            WORLD.to_vec(),
            vec![Sibling::new(HELLO.to_vec(), Side::Left)],
            TWO_LEAF_ROOT.to_vec(),
        )
    );
}

#[test]
fn test_three_leaf_proofs() {
    let leaves = hashed_leaves(&["hello", "world", "foo"]);
    let tree = MerkleTree::new(leaves.clone(), sha256).unwrap();
    assert_eq!(tree.root(), THREE_LEAF_ROOT.as_slice());
    assert_eq!(
        tree.proof(&leaves[0]),
        Proof::new(
            HELLO.to_vec(),
            vec![
                Sibling::new(WORLD.to_vec(), Side::Right),
                Sibling::new(FOO.to_vec(), Side::Right),
            ],
            THREE_LEAF_ROOT.to_vec(),
        )
    );
    assert_eq!(
        tree.proof(&leaves[1]),
        Proof::new(
            WORLD.to_vec(),
            vec![
                Sibling::new(HELLO.to_vec(), Side::Left),
                Sibling::new(FOO.to_vec(), Side::Right),
            ],
            THREE_LEAF_ROOT.to_vec(),
        )
    );
    // the carried-up leaf pairs one level late and against the subtree root
    assert_eq!(
        tree.proof(&leaves[2]),
        Proof::new(
            FOO.to_vec(),
            vec![Sibling::new(TWO_LEAF_ROOT.to_vec(), Side::Left)],
            THREE_LEAF_ROOT.to_vec(),
        )
    );
}

#[test]
fn test_pretty_proof_shape() {
    let leaves = hashed_leaves(&["hello", "world"]);
    let tree = MerkleTree::new(leaves.clone(), sha256).unwrap();
    let pretty = tree.pretty_proof(&leaves[0]);
    assert_eq!(pretty.leaf, hex::encode(HELLO));
    assert_eq!(pretty.root, hex::encode(TWO_LEAF_ROOT));
    assert_eq!(pretty.siblings.len(), 1);
    assert_eq!(pretty.siblings[0].side, Side::Right);
    assert_eq!(pretty.siblings[0].hash, hex::encode(WORLD));
    assert_eq!(
        serde_json::to_string(&pretty).unwrap(),
        format!(
            "{{\"leaf\":\"{}\",\"siblings\":[{{\"side\":\"right\",\"hash\":\"{}\"}}],\"root\":\"{}\"}}",
            hex::encode(HELLO),
            hex::encode(WORLD),
            hex::encode(TWO_LEAF_ROOT),
        )
    );
}

#[test]
fn test_unknown_leaf_yields_degenerate_proof() {
    let tree = MerkleTree::new(hashed_leaves(&["hello", "world"]), sha256).unwrap();
    let proof = tree.proof(b"hi");
    assert_eq!(proof.leaf(), b"hi");
    assert!(proof.siblings().is_empty());
    assert_eq!(proof.root(), tree.root());
    let pretty = tree.pretty_proof(b"hi");
    assert_eq!(pretty.leaf, "6869");
    assert!(pretty.siblings.is_empty());
    assert_eq!(pretty.root, hex::encode(TWO_LEAF_ROOT));
    // folding zero siblings reproduces the claimed leaf, nothing else
    assert!(!tree.verify(&proof));
}

#[test]
fn test_root_as_leaf_verifies_vacuously() {
    let tree = MerkleTree::new(hashed_leaves(&["hello", "world"]), sha256).unwrap();
    // the root itself was never a leaf, yet its empty-sibling proof holds:
    // verification alone is not a membership oracle
    let vacuous = tree.proof(tree.root());
    assert!(vacuous.siblings().is_empty());
    assert!(tree.verify(&vacuous));
    assert!(!tree.contains(tree.root()));
}

#[test]
fn test_proof_round_trip_all_sizes() {
    for count in 1..=9usize {
        let leaves: Vec<Vec<u8>> = (0..count).map(|i| sha256(&[i as u8])).collect();
        let tree = MerkleTree::new(leaves.clone(), sha256).unwrap();
        for (index, leaf) in leaves.iter().enumerate() {
            let proof = tree.proof(leaf);
            assert!(
                tree.verify(&proof),
                "proof for leaf {} of {} failed",
                index,
                count
            );
        }
    }
}

#[test]
fn test_flipped_sibling_byte_rejected() {
    let leaves = hashed_leaves(&["hello", "world", "foo", "bar"]);
    let tree = MerkleTree::new(leaves.clone(), sha256).unwrap();
    let proof = tree.proof(&leaves[0]);
    for position in 0..proof.siblings().len() {
        let mut siblings = proof.siblings().to_vec();
        let mut corrupted = siblings[position].hash().to_vec();
        corrupted[0] ^= 0x01;
        siblings[position] = Sibling::new(corrupted, siblings[position].side());
        let tampered = Proof::new(proof.leaf().to_vec(), siblings, proof.root().to_vec());
        assert!(!tree.verify(&tampered), "sibling {} accepted", position);
    }
}

#[test]
fn test_swapped_side_label_rejected() {
    let leaves = hashed_leaves(&["hello", "world", "foo", "bar"]);
    let tree = MerkleTree::new(leaves.clone(), sha256).unwrap();
    let proof = tree.proof(&leaves[2]);
    for position in 0..proof.siblings().len() {
        let mut siblings = proof.siblings().to_vec();
        siblings[position] = Sibling::new(
            siblings[position].hash().to_vec(),
            siblings[position].side().opposite(),
        );
        let tampered = Proof::new(proof.leaf().to_vec(), siblings, proof.root().to_vec());
        assert!(!tree.verify(&tampered), "side swap {} accepted", position);
    }
}

#[test]
fn test_substituted_root_rejected() {
    let leaves = hashed_leaves(&["hello", "world", "foo", "bar"]);
    let tree = MerkleTree::new(leaves.clone(), sha256).unwrap();
    let proof = tree.proof(&leaves[0]);
    let foreign = Proof::new(
        proof.leaf().to_vec(),
        proof.siblings().to_vec(),
        THREE_LEAF_ROOT.to_vec(),
    );
    assert!(!tree.verify(&foreign));
}
