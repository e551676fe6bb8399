//! Criterion micro-benchmarks for carving and full generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use labyrinth_bench::{cube_settings, reference_settings};
use labyrinth_carve::{carve, remove_dead_ends};
use labyrinth_core::SeededRng;
use labyrinth_engine::generate;
use labyrinth_space::{CubeSurface, FlatGrid};

/// Benchmark: carve a perfect 64×64 flat maze.
fn bench_carve_flat_64(c: &mut Criterion) {
    let grid = FlatGrid::new(64).unwrap();

    c.bench_function("carve_flat_64", |b| {
        b.iter(|| {
            let maze = carve(grid.clone(), &mut SeededRng::new(42));
            black_box(maze.passage_count());
        });
    });
}

/// Benchmark: carve a perfect cube maze with 16×16 faces.
///
/// Cube construction (the fold table) is excluded.
fn bench_carve_cube_16(c: &mut Criterion) {
    let cube = CubeSurface::new(16).unwrap();

    c.bench_function("carve_cube_16", |b| {
        b.iter(|| {
            let maze = carve(cube.clone(), &mut SeededRng::new(42));
            black_box(maze.passage_count());
        });
    });
}

/// Benchmark: build the cube fold table for 16×16 faces.
fn bench_cube_construction_16(c: &mut Criterion) {
    c.bench_function("cube_construction_16", |b| {
        b.iter(|| black_box(CubeSurface::new(black_box(16)).unwrap()));
    });
}

/// Benchmark: full dead-end removal on a carved 64×64 maze.
fn bench_remove_dead_ends_64(c: &mut Criterion) {
    let mut rng = SeededRng::new(42);
    let perfect = carve(FlatGrid::new(64).unwrap(), &mut rng);

    c.bench_function("remove_dead_ends_64", |b| {
        b.iter(|| {
            let mut maze = perfect.clone();
            let report = remove_dead_ends(&mut maze, 1.0, &mut rng);
            black_box(report);
        });
    });
}

/// Benchmark: whole pipeline, flat and cube reference profiles.
fn bench_generate(c: &mut Criterion) {
    let flat = reference_settings(42);
    let cube = cube_settings(42);

    c.bench_function("generate_flat_reference", |b| {
        b.iter(|| black_box(generate(&flat).unwrap()));
    });
    c.bench_function("generate_cube_reference", |b| {
        b.iter(|| black_box(generate(&cube).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_carve_flat_64,
    bench_carve_cube_16,
    bench_cube_construction_16,
    bench_remove_dead_ends_64,
    bench_generate
);
criterion_main!(benches);
