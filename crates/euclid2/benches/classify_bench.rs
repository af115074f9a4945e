//! Criterion benchmarks for batch quadrilateral classification.
//! Classification queries are pure and independent, so batch cost should
//! scale linearly with the number of quadrilaterals.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use euclid2::quad::rand::{draw_convex_quad, draw_parallelogram, ReplayToken};
use euclid2::quad::{is_parallelogram_nd, Quadrilateral};
use euclid2::GeomCfg;

fn mixed_batch(n: usize, seed: u64) -> Vec<Quadrilateral> {
    let cfg = GeomCfg::default();
    let mut out = Vec::with_capacity(n);
    for index in 0..n as u64 {
        let tok = ReplayToken { seed, index };
        if index % 2 == 0 {
            out.push(draw_parallelogram(tok));
        } else if let Some(q) = draw_convex_quad(tok, cfg) {
            out.push(q);
        }
    }
    out
}

fn bench_classify(c: &mut Criterion) {
    let cfg = GeomCfg::default();
    let mut group = c.benchmark_group("classify");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("is_parallelogram_nd", n), &n, |b, &n| {
            b.iter_batched(
                || mixed_batch(n, 43),
                |quads| {
                    let mut hits = 0usize;
                    for q in &quads {
                        if is_parallelogram_nd(q, cfg) {
                            hits += 1;
                        }
                    }
                    hits
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
