//! Benchmarks for the fan layout solver.
//!
//! Run with: cargo bench -p fanhand-layout --bench fan_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fanhand_layout::{fan_layout, fan_layout_excluding};
use std::hint::black_box;

fn bench_fan_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan/layout");
    for count in [1usize, 5, 12, 40, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| fan_layout(black_box(count), black_box(800.0), black_box(10.0)))
        });
    }
    group.finish();
}

fn bench_fan_layout_excluding(c: &mut Criterion) {
    c.bench_function("fan/layout_excluding_one_dragged", |b| {
        b.iter(|| fan_layout_excluding(black_box(40), 1200.0, 15.0, |i| i == 17))
    });
}

criterion_group!(benches, bench_fan_layout, bench_fan_layout_excluding);
criterion_main!(benches);
