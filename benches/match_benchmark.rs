//! Benchmarks for suffix set query performance.
//!
//! Run with: cargo bench
//!
//! This benchmark suite measures:
//! - Query throughput for mixed hit/miss workloads
//! - Miss cost for names unrelated to any rule
//! - Scalability with different rule set sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use suffixset::SuffixSet;

/// Generate a set with the given numbers of plain, exact and subdomain rules.
fn generate_set(all_count: usize, exact_count: usize, subdomain_count: usize) -> SuffixSet {
    let mut set = SuffixSet::new();

    for i in 0..all_count {
        set.add(&format!("site{}.com", i)).unwrap();
    }
    for i in 0..exact_count {
        set.add(&format!("host{}.example.net.", i)).unwrap();
    }
    for i in 0..subdomain_count {
        set.add(&format!(".zone{}.co.uk", i)).unwrap();
    }

    set
}

/// Generate test queries - mix of hits and misses.
fn generate_queries(count: usize, hit_ratio: f64) -> Vec<String> {
    let mut queries = Vec::with_capacity(count);
    let hits = (count as f64 * hit_ratio) as usize;

    for i in 0..hits {
        match i % 3 {
            0 => queries.push(format!("www.site{}.com", i % 1000)),
            1 => queries.push(format!("host{}.example.net", i % 1000)),
            _ => queries.push(format!("a.b.zone{}.co.uk", i % 1000)),
        }
    }

    for i in hits..count {
        queries.push(format!("deep.label.unknown{}.nonexistent.org", i));
    }

    queries
}

/// Benchmark mixed query throughput.
fn bench_find(c: &mut Criterion) {
    let set = generate_set(10_000, 5_000, 5_000);
    let queries = generate_queries(1000, 0.8);

    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("mixed_queries", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(set.find(query));
            }
        })
    });

    group.bench_function("plus_one", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(set.plus_one(query));
            }
        })
    });

    group.finish();
}

/// Benchmark misses on names sharing no labels with the rules.
fn bench_miss(c: &mut Criterion) {
    let set = generate_set(10_000, 5_000, 5_000);
    let name = "l1.l2.l3.l4.l5.l6.l7.l8.unrelated.example";

    let mut group = c.benchmark_group("miss");
    group.bench_function("deep_unrelated_name", |b| {
        b.iter(|| black_box(set.matches(black_box(name))))
    });
    group.finish();
}

/// Benchmark scalability with different rule set sizes.
fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let set = generate_set(*size, size / 2, size / 2);

        group.throughput(Throughput::Elements(100));
        group.bench_with_input(BenchmarkId::new("rules", size), size, |b, _| {
            let queries: Vec<_> = (0..100)
                .map(|i| format!("www.site{}.com", i % size))
                .collect();
            b.iter(|| {
                for query in &queries {
                    black_box(set.find(query));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark loading a rule list.
fn bench_read_from(c: &mut Criterion) {
    let set = generate_set(10_000, 5_000, 5_000);
    let mut text = Vec::new();
    set.write_to(&mut text).unwrap();

    let mut group = c.benchmark_group("read_from");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("20k_rules", |b| {
        b.iter(|| {
            let mut set = SuffixSet::new();
            set.read_from(text.as_slice()).unwrap();
            black_box(set.len())
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_find,
    bench_miss,
    bench_scalability,
    bench_read_from
);
criterion_main!(benches);
