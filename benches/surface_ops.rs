//! Benchmarks for surface construction and measurement.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mobius::prelude::*;

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_strip");
    for n in [50, 200, 800] {
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, &n| {
            let params = MobiusParams::default().with_resolution(n);
            b.iter(|| MobiusStrip::from_params(black_box(&params)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            let params = MobiusParams::default().with_resolution(n).sequential();
            b.iter(|| MobiusStrip::from_params(black_box(&params)).unwrap());
        });
    }
    group.finish();
}

fn bench_measurements(c: &mut Criterion) {
    let strip = MobiusStrip::new(1.0, 0.4, 400).unwrap();
    let sequential =
        MobiusStrip::from_params(&MobiusParams::default().with_width(0.4).with_resolution(400).sequential())
            .unwrap();

    c.bench_function("surface_area_400", |b| {
        b.iter(|| black_box(&strip).compute_surface_area());
    });

    c.bench_function("surface_area_400_sequential", |b| {
        b.iter(|| black_box(&sequential).compute_surface_area());
    });

    c.bench_function("edge_length_400", |b| {
        b.iter(|| black_box(&strip).compute_edge_length());
    });

    c.bench_function("triangulate_400", |b| {
        b.iter(|| build_from_grids(strip.x(), strip.y(), strip.z()).unwrap());
    });
}

criterion_group!(benches, bench_construction, bench_measurements);
criterion_main!(benches);
