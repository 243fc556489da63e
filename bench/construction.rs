use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bmt::{sha256, MerkleTree};

pub fn generate_random_leaf() -> Vec<u8> {
    let mut value = Vec::with_capacity(32);
    for _ in 0..32 {
        value.push(rand::random());
    }
    value
}

fn setup_leaves(num_leaves: usize) -> Vec<Vec<u8>> {
    (0..num_leaves).map(|_| generate_random_leaf()).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tree Construction");

    let small = setup_leaves(100);
    group.bench_function("100 leaves", |b| {
        b.iter(|| black_box(MerkleTree::new(small.clone(), sha256)).unwrap())
    });

    let large = setup_leaves(10_000);
    group.bench_function("10000 leaves", |b| {
        b.iter(|| black_box(MerkleTree::new(large.clone(), sha256)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_construction);
criterion_main!(benches);
