//! Ordered index benchmarks.
//!
//! Measures the two core operations: insertion (sequential and shuffled
//! key order) and point search on a pre-built index.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pagetree::OrderedIndex;

/// Deterministic permutation of `0..count` (multiplicative hashing).
fn shuffled(count: u64) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..count).collect();
    keys.sort_by_key(|k| k.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    keys
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_index_insert");

    for count in [1_000u64, 10_000].iter() {
        group.throughput(Throughput::Elements(*count));

        group.bench_with_input(BenchmarkId::new("sequential", count), count, |b, &count| {
            b.iter(|| {
                let mut index = OrderedIndex::new();
                for k in 0..count {
                    index.insert(k, k);
                }
                black_box(index)
            });
        });

        let keys = shuffled(*count);
        group.bench_with_input(BenchmarkId::new("shuffled", count), &keys, |b, keys| {
            b.iter(|| {
                let mut index = OrderedIndex::new();
                for &k in keys {
                    index.insert(k, k);
                }
                black_box(index)
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_index_search");

    for count in [1_000u64, 100_000].iter() {
        let index: OrderedIndex<u64, u64> = (0..*count).map(|k| (k, k)).collect();
        let probes = shuffled(*count);

        group.throughput(Throughput::Elements(*count));
        group.bench_with_input(BenchmarkId::new("hit", count), &probes, |b, probes| {
            b.iter(|| {
                for k in probes {
                    black_box(index.search(k));
                }
            });
        });
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let index: OrderedIndex<u64, u64> = (0..100_000u64).map(|k| (k, k)).collect();

    c.bench_function("ordered_index_scan_100k", |b| {
        b.iter(|| black_box(index.iter().map(|(_, v)| *v).sum::<u64>()));
    });
}

criterion_group!(benches, bench_insert, bench_search, bench_scan);
criterion_main!(benches);
