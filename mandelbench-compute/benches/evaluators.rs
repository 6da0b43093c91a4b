//! Criterion benchmarks comparing the two evaluation strategies.
//!
//! Run with:
//! ```bash
//! cargo bench -p mandelbench-compute
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mandelbench_compute::{BatchedEvaluator, EvaluationConfig, Evaluator, Region, ScalarEvaluator};
use std::hint::black_box;

fn classic(size: usize, max_iterations: u32) -> EvaluationConfig {
    let region = Region::new(-2.0, 1.0, -1.5, 1.5).expect("classic region is valid");
    EvaluationConfig::new(size, size, region, max_iterations).expect("non-empty grid")
}

// ── grid size ────────────────────────────────────────────────────────────────

fn bench_grid_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate/grid_size");
    group.sample_size(20);

    for size in [32usize, 128, 256] {
        let cfg = classic(size, 100);
        group.bench_with_input(BenchmarkId::new("scalar", size), &cfg, |b, cfg| {
            b.iter(|| ScalarEvaluator::new().evaluate(black_box(cfg)))
        });
        group.bench_with_input(BenchmarkId::new("batched", size), &cfg, |b, cfg| {
            b.iter(|| BatchedEvaluator::new().evaluate(black_box(cfg)))
        });
    }
    group.finish();
}

// ── iteration cap ────────────────────────────────────────────────────────────

fn bench_iteration_cap(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate/max_iterations");
    group.sample_size(20);

    for max in [50u32, 200, 1000] {
        let cfg = classic(96, max);
        group.bench_with_input(BenchmarkId::new("scalar", max), &cfg, |b, cfg| {
            b.iter(|| ScalarEvaluator::new().evaluate(black_box(cfg)))
        });
        group.bench_with_input(BenchmarkId::new("batched", max), &cfg, |b, cfg| {
            b.iter(|| BatchedEvaluator::new().evaluate(black_box(cfg)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid_size, bench_iteration_cap);
criterion_main!(benches);
