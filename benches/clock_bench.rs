use criterion::{black_box, criterion_group, criterion_main, Criterion};
use haywire_versioning::{ClockEntry, NodeId, VectorClock};

fn clock_with_nodes(nodes: impl Iterator<Item = NodeId>) -> VectorClock {
    let entries = nodes.map(|n| ClockEntry::new(n, u64::from(n) + 1).unwrap());
    VectorClock::builder().entries(entries).timestamp(0).build().unwrap()
}

fn clock_benchmarks(c: &mut Criterion) {
    // Interleaved ids so the two-pointer walks alternate sides.
    let even = clock_with_nodes((0..256).map(|n| n * 2));
    let odd = clock_with_nodes((0..256).map(|n| n * 2 + 1));

    c.bench_function("compare_256_concurrent", |b| {
        b.iter(|| black_box(&even).compare(black_box(&odd)))
    });

    c.bench_function("merge_256", |b| {
        b.iter(|| black_box(&even).merge(black_box(&odd)))
    });

    c.bench_function("increment_new_tail_node", |b| {
        b.iter(|| black_box(&even).increment(1000, 0).unwrap())
    });
}

criterion_group!(benches, clock_benchmarks);
criterion_main!(benches);
