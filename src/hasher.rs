//! Hash function injection seam
//!
//! The tree never commits to a digest algorithm. Anything that maps a byte
//! slice to a digest can drive it: a plain function, a capturing closure or
//! a hand-rolled strategy type.

use sha2::{Digest, Sha256};

/// Hashing strategy used for the inner nodes of a tree.
///
/// Implemented for every `Fn(&[u8]) -> Vec<u8>`, so plain functions and
/// closures inject directly. The digest must be a deterministic, pure
/// mapping to a fixed-width byte sequence; the tree re-checks the width
/// after every call it makes during construction.
pub trait Hasher {
    fn hash(&self, data: &[u8]) -> Vec<u8>;
}

impl<F> Hasher for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        self(data)
    }
}

/// SHA-256 digest of `data`, usable directly as a tree hasher.
pub fn sha256(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}
