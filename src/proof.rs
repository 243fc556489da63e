//! Inclusion proofs
//!
//! A proof carries the leaf it was generated for, the sibling digests on
//! the path to the root (each labelled with the side it sits on) and the
//! root the path commits to. Proofs are plain values with no reference
//! back to the tree that produced them, so they stay checkable after the
//! tree is gone.

use serde::Serialize;

use crate::Hasher;

/// Which side of the running accumulator a sibling is concatenated on
/// when recomputing the path to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single sibling on the path from a leaf to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sibling {
    hash: Vec<u8>,
    side: Side,
}

impl Sibling {
    pub fn new(hash: Vec<u8>, side: Side) -> Self {
        Self { hash, side }
    }

    /// Digest of the sibling node.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Side the sibling is concatenated on when recomputing the parent.
    pub fn side(&self) -> Side {
        self.side
    }
}

/// An inclusion proof for a single leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    leaf: Vec<u8>,
    siblings: Vec<Sibling>,
    root: Vec<u8>,
}

impl Proof {
    /// Assembles a proof from its parts.
    pub fn new(leaf: Vec<u8>, siblings: Vec<Sibling>, root: Vec<u8>) -> Self {
        Self {
            leaf,
            siblings,
            root,
        }
    }

    /// The leaf the proof was generated for, exactly as supplied.
    pub fn leaf(&self) -> &[u8] {
        &self.leaf
    }

    /// Siblings ordered from the leaf level upward to just below the root.
    pub fn siblings(&self) -> &[Sibling] {
        &self.siblings
    }

    /// The root the proof claims to commit to.
    pub fn root(&self) -> &[u8] {
        &self.root
    }

    /// Hex rendering of the proof, shaped for structured output.
    pub fn pretty(&self) -> PrettyProof {
        PrettyProof {
            leaf: hex::encode(&self.leaf),
            siblings: self
                .siblings
                .iter()
                .map(|sibling| PrettySibling {
                    side: sibling.side,
                    hash: hex::encode(&sibling.hash),
                })
                .collect(),
            root: hex::encode(&self.root),
        }
    }
}

/// Hex-string rendering of a [`Sibling`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrettySibling {
    pub side: Side,
    pub hash: String,
}

/// Hex-string rendering of a [`Proof`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrettyProof {
    pub leaf: String,
    pub siblings: Vec<PrettySibling>,
    pub root: String,
}

/// Verify an inclusion proof with the hash function the tree was built
/// with.
///
/// The accumulator starts at the claimed leaf; every sibling in order is
/// concatenated on its recorded side ([`Side::Left`] puts the sibling
/// first) and the pair is hashed. The proof holds if the final
/// accumulator matches the claimed root byte for byte.
///
/// A proof with no siblings folds to the claimed leaf itself, so it
/// verifies exactly when leaf and root are equal.
pub fn verify_proof<H: Hasher>(proof: &Proof, hasher: &H) -> bool {
    let mut accumulator = proof.leaf().to_vec();
    for sibling in proof.siblings() {
        let preimage = match sibling.side() {
            Side::Left => [sibling.hash(), accumulator.as_slice()].concat(),
            Side::Right => [accumulator.as_slice(), sibling.hash()].concat(),
        };
        accumulator = hasher.hash(&preimage);
    }
    accumulator.as_slice() == proof.root()
}
