use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use pair_merkle::{Address, LeafValue, MerkleTree};

fn make_leaves(count: usize) -> Vec<LeafValue> {
    (0..count)
        .map(|i| {
            let mut first = [0u8; 20];
            let mut second = [0u8; 20];
            first[12..].copy_from_slice(&(i as u64).to_be_bytes());
            second[..8].copy_from_slice(&(i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15).to_le_bytes());
            LeafValue::pair(Address::from_bytes(first), Address::from_bytes(second))
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let sizes = [1024usize, 16_384, 65_536];
    let mut group = c.benchmark_group("build");
    for &size in &sizes {
        let leaves = make_leaves(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &leaves, |b, leaves| {
            b.iter_batched(
                || leaves.clone(),
                |leaves| {
                    let _ = MerkleTree::of(leaves).unwrap();
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_proofs(c: &mut Criterion) {
    let tree = MerkleTree::of(make_leaves(1 << 14)).unwrap();
    let index = tree.len() / 3;
    let proof = tree.proof_for_index(index).unwrap();
    c.bench_function("proof_for_index", |b| {
        b.iter(|| tree.proof_for_index(index).unwrap());
    });
    c.bench_function("verify_index", |b| {
        b.iter(|| assert!(tree.verify_index(index, &proof).unwrap()));
    });
}

fn bench_multi_proof(c: &mut Criterion) {
    let tree = MerkleTree::of(make_leaves(1 << 12)).unwrap();
    for &queries in &[16usize, 64, 256] {
        let indices: Vec<usize> = (0..queries).map(|i| i * tree.len() / queries).collect();
        let multi = tree.multi_proof_for_indices(&indices).unwrap();
        c.bench_with_input(
            BenchmarkId::new("multi_proof_generate", queries),
            &indices,
            |b, indices| {
                b.iter(|| tree.multi_proof_for_indices(indices).unwrap());
            },
        );
        c.bench_with_input(
            BenchmarkId::new("multi_proof_verify", queries),
            &multi,
            |b, multi| {
                b.iter(|| assert!(tree.verify_multi_proof(multi).unwrap()));
            },
        );
    }
}

fn merkle_benches(c: &mut Criterion) {
    bench_build(c);
    bench_proofs(c);
    bench_multi_proof(c);
}

criterion_group!(benches, merkle_benches);
criterion_main!(benches);
