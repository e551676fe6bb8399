//! Criterion micro-benchmarks for distance analysis.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use labyrinth_bench::{carved_cube, carved_flat};
use labyrinth_core::{GridCoord, SeededRng};
use labyrinth_path::{
    compute_distances, find_diameter_endpoints, select_goal_by_ratio, shortest_path,
};
use labyrinth_space::Topology;

/// Benchmark: one BFS over a 128×128 maze with loops.
fn bench_bfs_flat_128(c: &mut Criterion) {
    let maze = carved_flat(128, 0.3, 42);

    c.bench_function("bfs_flat_128", |b| {
        b.iter(|| {
            let field = compute_distances(&maze, GridCoord::new(0, 0));
            black_box(field.max_distance());
        });
    });
}

/// Benchmark: one BFS over a cube maze with 32×32 faces.
fn bench_bfs_cube_32(c: &mut Criterion) {
    let maze = carved_cube(32, 0.3, 42);
    let origin = maze.topology().origin();

    c.bench_function("bfs_cube_32", |b| {
        b.iter(|| {
            let field = compute_distances(&maze, origin);
            black_box(field.max_distance());
        });
    });
}

/// Benchmark: double-BFS diameter search on a 64×64 maze.
fn bench_diameter_flat_64(c: &mut Criterion) {
    let maze = carved_flat(64, 0.0, 42);
    let mut rng = SeededRng::new(7);

    c.bench_function("diameter_flat_64", |b| {
        b.iter(|| black_box(find_diameter_endpoints(&maze, &mut rng)));
    });
}

/// Benchmark: goal selection at half distance on a precomputed field.
fn bench_goal_select_64(c: &mut Criterion) {
    let maze = carved_flat(64, 0.3, 42);
    let field = compute_distances(&maze, GridCoord::new(0, 0));
    let max = field.max_distance().unwrap_or(0);
    let mut rng = SeededRng::new(7);

    c.bench_function("goal_select_64", |b| {
        b.iter(|| black_box(select_goal_by_ratio(&field, max, 0.5, &mut rng)));
    });
}

/// Benchmark: corner-to-corner path on a 64×64 maze.
fn bench_shortest_path_64(c: &mut Criterion) {
    let maze = carved_flat(64, 0.3, 42);

    c.bench_function("shortest_path_64", |b| {
        b.iter(|| {
            black_box(shortest_path(&maze, GridCoord::new(0, 0), GridCoord::new(63, 63)));
        });
    });
}

criterion_group!(
    benches,
    bench_bfs_flat_128,
    bench_bfs_cube_32,
    bench_diameter_flat_64,
    bench_goal_select_64,
    bench_shortest_path_64
);
criterion_main!(benches);
