//! Error types for the layered Merkle tree implementation

use std::error::Error;
use std::fmt::Display;

/// Error type for tree construction
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TreeError {
    /// Constructor arguments were malformed
    InvalidInput,
    /// Two leaves compared byte-equal
    DuplicateLeaf {
        /// The duplicated leaf value
        leaf: Vec<u8>,
        /// Index of its first occurrence in the input
        index: usize,
    },
    /// The injected hash function broke the fixed-width digest contract
    HashContractViolation(String),
}

impl Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::InvalidInput => write!(f, "at least one leaf is required"),
            TreeError::DuplicateLeaf { leaf, index } => {
                write!(
                    f,
                    "duplicate leaf {} first seen at index {}",
                    hex::encode(leaf),
                    index
                )
            }
            TreeError::HashContractViolation(reason) => {
                write!(f, "hash contract violation: {}", reason)
            }
        }
    }
}

impl Error for TreeError {}
