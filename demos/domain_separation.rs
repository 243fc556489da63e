//! Example of separating leaf and inner-node hash domains
//!
//! This example demonstrates:
//! - Colliding two trees that reuse one hash function for leaves and
//!   inner nodes
//! - Closing the hole with distinct leaf and inner-node prefixes

use bmt::{sha256, MerkleTree};

fn leaf_hash(data: &[u8]) -> Vec<u8> {
    sha256(&[&[0u8][..], data].concat())
}

fn inner_hash(data: &[u8]) -> Vec<u8> {
    sha256(&[&[1u8][..], data].concat())
}

fn main() {
    let words: [&[u8]; 4] = [b"hello", b"world", b"foo", b"bar"];

    // One shared SHA-256 domain: a two-leaf tree built from the four-leaf
    // tree's first inner layer reaches the very same root.
    let wide_leaves: Vec<Vec<u8>> = words.iter().map(|word| sha256(word)).collect();
    let wide = MerkleTree::new(wide_leaves.clone(), sha256).unwrap();
    let narrow_leaves = vec![
        sha256(&[wide_leaves[0].as_slice(), wide_leaves[1].as_slice()].concat()),
        sha256(&[wide_leaves[2].as_slice(), wide_leaves[3].as_slice()].concat()),
    ];
    let narrow = MerkleTree::new(narrow_leaves, sha256).unwrap();
    println!("Shared domain, four leaves: {}", wide.pretty_root());
    println!("Shared domain, two leaves:  {}", narrow.pretty_root());
    println!("Roots collide: {}\n", wide.root() == narrow.root());

    // Distinct prefixes for leaf and inner hashing close the door.
    let wide_leaves: Vec<Vec<u8>> = words.iter().map(|word| leaf_hash(word)).collect();
    let wide = MerkleTree::new(wide_leaves.clone(), inner_hash).unwrap();
    let narrow_leaves = vec![
        leaf_hash(&[wide_leaves[0].as_slice(), wide_leaves[1].as_slice()].concat()),
        leaf_hash(&[wide_leaves[2].as_slice(), wide_leaves[3].as_slice()].concat()),
    ];
    let narrow = MerkleTree::new(narrow_leaves, inner_hash).unwrap();
    println!("Split domains, four leaves: {}", wide.pretty_root());
    println!("Split domains, two leaves:  {}", narrow.pretty_root());
    println!("Roots collide: {}", wide.root() == narrow.root());
}
