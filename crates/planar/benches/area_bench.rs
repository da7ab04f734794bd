//! Criterion benchmarks for area queries.
//! Focus sizes: n in {3, 10, 100, 1000} polygon vertices.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_polygon(n: usize, seed: u64) -> Polygon {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = std::f64::consts::TAU / n as f64;
    let pts = (0..n)
        .map(|k| {
            let theta = step * (k as f64 + rng.gen_range(-0.3..0.3));
            let r = rng.gen_range(0.5..1.5);
            Point::new(r * theta.cos(), r * theta.sin())
        })
        .collect();
    Polygon::new(pts).unwrap()
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[3usize, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("shoelace_area", n), &n, |b, &n| {
            let poly = random_polygon(n, 43);
            b.iter(|| poly.area().unwrap())
        });
        group.bench_with_input(BenchmarkId::new("construct_unique_scan", n), &n, |b, &n| {
            let pts = random_polygon(n, 44).vertices().to_vec();
            b.iter_batched(
                || pts.clone(),
                |pts| Polygon::new(pts).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");
    group.bench_function("circumscribed", |b| {
        let (p, q, r) = (
            Point::new(1.0, 0.0),
            Point::new(-0.3, 0.9),
            Point::new(-0.5, -0.8),
        );
        b.iter(|| Circle::circumscribed(p, q, r).unwrap().area().unwrap())
    });
    group.bench_function("heron", |b| {
        b.iter(|| Triangle::from_sides(3.0, 4.0, 5.0).unwrap().area().unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_polygon, bench_circle);
criterion_main!(benches);
