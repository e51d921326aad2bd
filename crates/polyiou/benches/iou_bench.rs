//! Criterion benchmarks for the IoU pipeline.
//! Focus sizes: n in {3, 8, 32, 128} vertices per polygon.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use polyiou::geom2::rand::{draw_polygon_inscribed, InscribedCfg, ReplayToken, VertexCount};
use polyiou::iou;

fn inscribed_pair(n: usize, seed: u64) -> (Vec<Vector2<f64>>, Vec<Vector2<f64>>) {
    let cfg = InscribedCfg {
        vertex_count: VertexCount::Fixed(n),
        angle_jitter_frac: 0.45,
        random_phase: true,
    };
    (
        draw_polygon_inscribed(cfg, ReplayToken { seed, index: 0 }),
        draw_polygon_inscribed(cfg, ReplayToken { seed, index: 1 }),
    )
}

fn bench_iou(c: &mut Criterion) {
    let mut group = c.benchmark_group("iou");
    for &n in &[3usize, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::new("inscribed_pair", n), &n, |b, &n| {
            b.iter_batched(
                || inscribed_pair(n, 43),
                |(p1, p2)| {
                    let _res = iou(&p1, &p2);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_iou);
criterion_main!(benches);
