use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector3;
use rigid_motion::{Broadcast, MotionModel};
use std::f64::consts::FRAC_PI_3;
use std::hint::black_box;

fn sample_motion() -> MotionModel {
    let axis = Vector3::new(1.0, 1.0, 1.0).normalize();
    MotionModel::with_origin(
        axis,
        FRAC_PI_3,
        Vector3::new(0.5, -0.25, 1.0),
        Vector3::new(1.0, 1.0, 0.0),
    )
    .unwrap()
}

fn sample_points(n: usize) -> Vec<Vector3<f64>> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            Vector3::new(x.sin(), x.cos(), 0.001 * x)
        })
        .collect()
}

fn sample_times(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / n.max(1) as f64).collect()
}

/// Single-point transforms and rotation matrix construction
fn bench_single_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_point");
    let motion = sample_motion();
    let point = Vector3::new(0.3, -0.7, 1.1);

    group.bench_function("transform_one", |b| {
        b.iter(|| motion.transform_one(black_box(&point), black_box(0.5)));
    });

    group.bench_function("inverse_transform_one", |b| {
        b.iter(|| motion.inverse_transform_one(black_box(&point), black_box(0.5)));
    });

    group.bench_function("rotation_matrix_at", |b| {
        b.iter(|| motion.rotation_matrix_at(black_box(0.5)));
    });

    group.finish();
}

/// Batch transforms with uniform and per-point times
fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batches");
    let motion = sample_motion();

    for &n in &[100usize, 10_000, 100_000] {
        let points = sample_points(n);
        let times = sample_times(n);

        group.bench_with_input(BenchmarkId::new("transform_uniform", n), &points, |b, points| {
            b.iter(|| motion.transform_batch(black_box(points), Broadcast::Uniform(0.75)));
        });

        group.bench_with_input(BenchmarkId::new("transform_per_item", n), &points, |b, points| {
            b.iter(|| motion.transform_batch(black_box(points), Broadcast::PerItem(&times)));
        });

        group.bench_with_input(BenchmarkId::new("rotate_per_item", n), &points, |b, points| {
            b.iter(|| motion.rotate_only(black_box(points), Broadcast::PerItem(&times)));
        });
    }

    group.finish();
}

/// Tetrahedral mesh motion, one time per element
fn bench_tetrahedra(c: &mut Criterion) {
    let mut group = c.benchmark_group("tetrahedra");
    let motion = sample_motion();

    for &n in &[1_000usize, 50_000] {
        let vertices = sample_points(4 * n);
        let tetrahedra: Vec<[Vector3<f64>; 4]> = vertices
            .chunks_exact(4)
            .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
            .collect();
        let times = sample_times(n);

        group.bench_with_input(BenchmarkId::new("transform_grouped", n), &tetrahedra, |b, tets| {
            b.iter(|| motion.transform_grouped_batch(black_box(tets), Broadcast::PerItem(&times)));
        });
    }

    group.finish();
}

criterion_group!(motion_benches, bench_single_point, bench_batches, bench_tetrahedra);
criterion_main!(motion_benches);
