//! IndexVec and diagnostics benchmarks
//!
//! Run with: `cargo bench --bench index_vec_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vlark_util::define_idx;
use vlark_util::diagnostic::Handler;
use vlark_util::index_vec::IndexVec;
use vlark_util::span::Span;

define_idx!(BenchId);

/// Benchmark pushing lines into an arena
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_vec_push");

    for size in [100usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut vec: IndexVec<BenchId, u64> = IndexVec::with_capacity(size);
                for i in 0..size {
                    vec.push(i as u64);
                }
                black_box(vec)
            })
        });
    }

    group.finish();
}

/// Benchmark random access by typed index
fn bench_index(c: &mut Criterion) {
    let vec: IndexVec<BenchId, u64> = (0..10_000u64).collect();
    let ids: Vec<BenchId> = vec.indices().collect();

    c.bench_function("index_vec_index", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for id in &ids {
                sum = sum.wrapping_add(vec[*id]);
            }
            black_box(sum)
        })
    });
}

/// Benchmark fallback suppression over a noisy handler
fn bench_reportable(c: &mut Criterion) {
    let handler = Handler::new();
    for line in 1..=500u32 {
        handler
            .build_error(Span::point(line, 1), "invalid token")
            .fallback()
            .emit(&handler);
        if line % 2 == 0 {
            handler
                .build_error(Span::point(line, 1), "unterminated string literal")
                .emit(&handler);
        }
    }

    c.bench_function("handler_reportable", |b| {
        b.iter(|| black_box(handler.reportable()))
    });
}

criterion_group!(benches, bench_push, bench_index, bench_reportable);
criterion_main!(benches);
