//! Benchmarks for dot, matmul and concat.
//!
//! Run with:
//! ```bash
//! cargo bench --bench products
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use trirank_core::{dot, matmul, Array};

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");

    for len in [1_000usize, 100_000] {
        let a = Array::random(&[len], -1.0, 1.0).unwrap();
        let b = Array::random(&[len], -1.0, 1.0).unwrap();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(dot(black_box(a), black_box(b))));
        });
    }

    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(20);

    for n in [32usize, 128, 256] {
        let a = Array::random(&[n, n], -1.0, 1.0).unwrap();
        let b = Array::random(&[n, n], -1.0, 1.0).unwrap();
        group.throughput(Throughput::Elements((n * n * n) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(matmul(black_box(a), black_box(b))));
        });
    }

    group.finish();
}

fn bench_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat");
    let parts: Vec<Array> = (0..4).map(|_| Array::ones(&[64, 64, 64]).unwrap()).collect();
    group.throughput(Throughput::Elements((4 * 64 * 64 * 64) as u64));

    for dim in 0..3 {
        group.bench_with_input(BenchmarkId::new("axis", dim), &dim, |b, &dim| {
            b.iter(|| black_box(Array::concat(black_box(&parts), dim)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dot, bench_matmul, bench_concat);
criterion_main!(benches);
