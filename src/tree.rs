//! Core layered Merkle tree implementation

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::{
    proof::{verify_proof, PrettyProof, Proof, Sibling, Side},
    Hasher, TreeError,
};

/// Binary Merkle hash tree over a fixed set of leaves.
///
/// Layer 0 holds the leaves exactly as supplied and every later layer
/// holds the digests of adjacent pairs from the layer below; an unpaired
/// trailing node is promoted into the parent layer unchanged (carry-up).
/// The last layer is a single node, the root.
///
/// Leaves are not hashed by the tree itself. Callers that want
/// leaf-level hashing hash before inserting, which is also where domain
/// separation between leaf and inner-node hashing has to happen (see the
/// `domain_separation` example).
///
/// A tree is immutable once built: there is no insertion or deletion
/// API, so sharing it across concurrent readers needs no
/// synchronization.
pub struct MerkleTree<H: Hasher> {
    layers: Vec<Vec<Vec<u8>>>,
    hasher: H,
}

impl<H: Hasher> fmt::Debug for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}

impl<H: Hasher> MerkleTree<H> {
    /// Builds the full layer table from `leaves` bottom-up.
    ///
    /// Leaves must be unique; duplicates fail with
    /// [`TreeError::DuplicateLeaf`] carrying the value and the index of
    /// its first occurrence. An empty leaf set fails with
    /// [`TreeError::InvalidInput`]. Both checks run before the first
    /// hash call.
    ///
    /// Digests returned by `hasher` must be non-empty and all of one
    /// width; the width is re-checked after every call and a violating
    /// call fails the build with [`TreeError::HashContractViolation`].
    /// Construction is atomic: on any error no tree is observable.
    pub fn new(leaves: Vec<Vec<u8>>, hasher: H) -> Result<Self, TreeError> {
        if leaves.is_empty() {
            return Err(TreeError::InvalidInput);
        }
        if let Some((leaf, index)) = find_duplicate(&leaves) {
            return Err(TreeError::DuplicateLeaf { leaf, index });
        }

        let mut layers = vec![leaves];
        let mut digest_width = None;
        while layers[layers.len() - 1].len() > 1 {
            let current = &layers[layers.len() - 1];
            let mut parent = Vec::with_capacity(current.len().div_ceil(2));
            let mut pairs = current.chunks_exact(2);
            for pair in &mut pairs {
                let preimage = [pair[0].as_slice(), pair[1].as_slice()].concat();
                let digest = hasher.hash(&preimage);
                match digest_width {
                    None if digest.is_empty() => {
                        return Err(TreeError::HashContractViolation(
                            "digest is empty".to_string(),
                        ));
                    }
                    None => digest_width = Some(digest.len()),
                    Some(width) if digest.len() != width => {
                        return Err(TreeError::HashContractViolation(format!(
                            "digest width changed from {} to {} bytes",
                            width,
                            digest.len()
                        )));
                    }
                    Some(_) => {}
                }
                parent.push(digest);
            }
            // odd layer: the unpaired node moves up as-is, no re-hash
            if let [unpaired] = pairs.remainder() {
                parent.push(unpaired.clone());
            }
            layers.push(parent);
        }
        Ok(Self { layers, hasher })
    }

    /// Root digest of the tree.
    pub fn root(&self) -> &[u8] {
        &self.layers[self.layers.len() - 1][0]
    }

    /// The full layer table, leaves first, root last.
    pub fn layers(&self) -> &[Vec<Vec<u8>>] {
        &self.layers
    }

    /// The leaves exactly as supplied at construction.
    pub fn leaves(&self) -> &[Vec<u8>] {
        &self.layers[0]
    }

    /// Number of leaves the tree was built from.
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Number of layers, leaves and root included.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Whether `leaf` is byte-equal to one of the tree's leaves.
    ///
    /// This is the membership check; [`MerkleTree::proof`] answers for
    /// unknown leaves too and its result alone does not imply inclusion.
    pub fn contains(&self, leaf: &[u8]) -> bool {
        self.layers[0].iter().any(|known| known == leaf)
    }

    /// Root digest rendered as lowercase hex.
    pub fn pretty_root(&self) -> String {
        hex::encode(self.root())
    }

    /// The layer table rendered element-wise as lowercase hex.
    pub fn pretty_layers(&self) -> Vec<Vec<String>> {
        self.layers
            .iter()
            .map(|layer| layer.iter().map(hex::encode).collect())
            .collect()
    }

    /// Inclusion proof for `leaf`, located by exact byte equality
    /// against the leaf layer.
    ///
    /// A leaf that is not part of the tree yields a proof with an empty
    /// sibling list that still carries the real root. Folding zero
    /// siblings leaves the claimed leaf as the candidate root, so such
    /// a proof passes verification exactly when the claimed leaf equals
    /// the root; use [`MerkleTree::contains`] for a membership answer.
    pub fn proof(&self, leaf: &[u8]) -> Proof {
        let Some(mut index) = self.layers[0].iter().position(|known| known == leaf) else {
            return Proof::new(leaf.to_vec(), Vec::new(), self.root().to_vec());
        };
        let mut siblings = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let node_side = if index % 2 == 0 { Side::Left } else { Side::Right };
            let sibling_index = match node_side {
                Side::Left => index + 1,
                Side::Right => index - 1,
            };
            // carry-up case: the node has no sibling at this level
            if let Some(hash) = layer.get(sibling_index) {
                siblings.push(Sibling::new(hash.clone(), node_side.opposite()));
            }
            index /= 2;
        }
        Proof::new(leaf.to_vec(), siblings, self.root().to_vec())
    }

    /// Inclusion proof for `leaf` rendered as hex.
    pub fn pretty_proof(&self, leaf: &[u8]) -> PrettyProof {
        self.proof(leaf).pretty()
    }

    /// Checks `proof` against its claimed root using this tree's
    /// hasher. See [`verify_proof`] for the fold.
    pub fn verify(&self, proof: &Proof) -> bool {
        verify_proof(proof, &self.hasher)
    }
}

/// First duplicated leaf value, reported with the index of its first
/// occurrence.
fn find_duplicate(leaves: &[Vec<u8>]) -> Option<(Vec<u8>, usize)> {
    let mut seen = HashMap::with_capacity(leaves.len());
    for (index, leaf) in leaves.iter().enumerate() {
        if let Some(&first) = seen.get(leaf.as_slice()) {
            return Some((leaf.clone(), first));
        }
        seen.insert(leaf.as_slice(), index);
    }
    None
}

impl<H: Hasher> Display for MerkleTree<H> {
    /// Renders the hex layer table as JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.pretty_layers()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
