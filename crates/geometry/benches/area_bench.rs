//! Criterion benchmarks for construction and area over mixed shape lists.
//! Focus sizes: n in {10, 100, 1000}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geometry::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn bench_area(c: &mut Criterion) {
    let cfg = DrawCfg::default();
    let mut group = c.benchmark_group("area");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("total_area_enum", n), &n, |b, &n| {
            let shapes = draw_shapes(43, n, cfg).unwrap();
            b.iter(|| total_area(&shapes))
        });

        group.bench_with_input(BenchmarkId::new("total_area_dyn", n), &n, |b, &n| {
            let shapes: Vec<Box<dyn Shape>> = draw_shapes(44, n, cfg)
                .unwrap()
                .into_iter()
                .map(|s| -> Box<dyn Shape> {
                    match s {
                        AnyShape::Circle(c) => Box::new(c),
                        AnyShape::Triangle(t) => Box::new(t),
                    }
                })
                .collect();
            b.iter(|| total_area(&shapes))
        });

        group.bench_with_input(BenchmarkId::new("triangle_new", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(45);
                    (0..n)
                        .map(|_| draw_triangle(&mut rng, cfg).unwrap().sides())
                        .collect::<Vec<_>>()
                },
                |sides| {
                    for [a, b, c] in sides {
                        let _t = Triangle::new(c, a, b).unwrap();
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_area);
criterion_main!(benches);
