use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bmt::{sha256, MerkleTree, Proof};

pub fn generate_random_leaf() -> Vec<u8> {
    let mut value = Vec::with_capacity(32);
    for _ in 0..32 {
        value.push(rand::random());
    }
    value
}

fn setup_tree(num_leaves: usize) -> (MerkleTree<fn(&[u8]) -> Vec<u8>>, Vec<Vec<u8>>) {
    let leaves: Vec<Vec<u8>> = (0..num_leaves).map(|_| generate_random_leaf()).collect();
    let tree = MerkleTree::new(leaves.clone(), sha256 as fn(&[u8]) -> Vec<u8>).unwrap();
    (tree, leaves)
}

fn bench_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Proof Generation");

    let (tree, leaves) = setup_tree(1000);
    group.bench_function("1000 leaves", |b| {
        b.iter(|| {
            for leaf in &leaves {
                black_box(tree.proof(leaf));
            }
        })
    });

    group.finish();
}

fn bench_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("Proof Verification");

    let (tree, leaves) = setup_tree(1000);
    let proofs: Vec<Proof> = leaves.iter().map(|leaf| tree.proof(leaf)).collect();
    group.bench_function("1000 leaves", |b| {
        b.iter(|| {
            for proof in &proofs {
                black_box(tree.verify(proof));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_proof_generation, bench_proof_verification);
criterion_main!(benches);
