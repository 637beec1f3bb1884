//! Criterion benchmarks for `DelaunayDiagram::split`.
//! Focus sizes: n in {16, 64, 256, 1024}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p diagram

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use diagram::prelude::*;

fn sites(n: usize, layout: SiteLayout, seed: u64) -> Vec<Point> {
    let cfg = SiteCfg {
        count: SiteCount::Fixed(n),
        layout,
        ..SiteCfg::default()
    };
    draw_sites(cfg, border(), ReplayToken::new(seed, n as u64))
}

fn border() -> Rectangle {
    Rectangle::new(0.0, 0.0, 1000.0, 1000.0)
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    for &n in &[16usize, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, &n| {
            b.iter_batched(
                || DelaunayDiagram::new(sites(n, SiteLayout::Uniform, 43)),
                |d| {
                    let _tri = d.split(border()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        // Near-cocircular quadruples exercise the legalization tolerances.
        group.bench_with_input(BenchmarkId::new("jittered_grid", n), &n, |b, &n| {
            let layout = SiteLayout::JitteredGrid { jitter_frac: 0.05 };
            b.iter_batched(
                || DelaunayDiagram::new(sites(n, layout, 44)),
                |d| {
                    let _tri = d.split(border()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[64usize, 1024] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            let pts = sites(n, SiteLayout::Uniform, 45);
            b.iter(|| convex_hull(&pts))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split, bench_hull);
criterion_main!(benches);
