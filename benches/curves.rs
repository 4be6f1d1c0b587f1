//! Benchmarks for curve evaluation and path cleanup.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pathstack::curves::{evaluate, CubicBezier3, CurveType};
use pathstack::metrics::{remove_colinear, resample_by_spacing};
use pathstack::painting::{shape_from_stroke, PaintSettings};
use pathstack::{Path, PathPoint, Point3};

/// A wobbly closed loop with `n` control points.
fn generate_loop(n: usize) -> Path {
    let points = (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * std::f32::consts::TAU;
            let r = 10.0 + ((i * 17) % 7) as f32 * 0.3; // Deterministic wobble
            PathPoint::new(Point3::new(r * a.cos(), r * a.sin(), 0.0))
        })
        .collect();
    Path::new(points, true)
}

fn bench_cubic_bezier_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubic_bezier_eval");

    let curve = CubicBezier3::new(
        Point3::new(0.0_f32, 0.0, 0.0),
        Point3::new(3.0, 10.0, 0.0),
        Point3::new(7.0, 10.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
    );

    group.bench_function("single", |b| b.iter(|| curve.eval(black_box(0.5))));

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("batch", count), &count, |b, &count| {
            b.iter(|| {
                for i in 0..count {
                    let t = i as f32 / count as f32;
                    let _ = curve.eval(black_box(t));
                }
            })
        });
    }

    group.finish();
}

fn bench_path_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_evaluate");

    for n in [8, 32, 128] {
        let path = generate_loop(n);
        group.throughput(Throughput::Elements((n * 16) as u64));

        for curve in [CurveType::CatmullRom, CurveType::CubicBezier] {
            group.bench_with_input(
                BenchmarkId::new(format!("{curve:?}"), n),
                &path,
                |b, path| b.iter(|| evaluate(black_box(path), curve, 16)),
            );
        }
    }

    group.finish();
}

fn bench_cleanup(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_cleanup");

    for n in [100, 1000] {
        let raw = generate_loop(n).positions();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("resample", n), &raw, |b, raw| {
            b.iter(|| resample_by_spacing(black_box(raw), 0.5, true))
        });
        group.bench_with_input(BenchmarkId::new("remove_colinear", n), &raw, |b, raw| {
            b.iter(|| remove_colinear(black_box(raw), 10.0, true))
        });
        group.bench_with_input(BenchmarkId::new("shape_from_stroke", n), &raw, |b, raw| {
            b.iter(|| shape_from_stroke(black_box(raw), &PaintSettings::default()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cubic_bezier_eval, bench_path_evaluate, bench_cleanup);
criterion_main!(benches);
