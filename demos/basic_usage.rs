//! Basic example of using the layered Merkle tree
//!
//! This example demonstrates:
//! - Building a tree from pre-hashed leaves
//! - Rendering the root and the layer table
//! - Generating and verifying an inclusion proof

use bmt::{sha256, MerkleTree};

fn main() {
    // Hash the raw values first; the tree never hashes leaves itself
    let leaves: Vec<Vec<u8>> = ["hello", "world", "foo"]
        .iter()
        .map(|word| sha256(word.as_bytes()))
        .collect();
    let tree = MerkleTree::new(leaves, sha256).unwrap();

    println!("Root hash: {}", tree.pretty_root());
    println!("Layer table: {}", tree);

    // Prove that "hello" (well, its digest) is in the tree
    let leaf = sha256(b"hello");
    let proof = tree.proof(&leaf);
    println!(
        "Proof: {}",
        serde_json::to_string_pretty(&proof.pretty()).unwrap()
    );
    println!("Proof verification: {}", tree.verify(&proof));

    // A leaf the tree has never seen gets an empty-sibling proof that
    // does not verify
    let unknown = tree.proof(b"hi");
    println!("Unknown leaf verification: {}", tree.verify(&unknown));
}
