//! Benchmark profiles for the Labyrinth maze engine.
//!
//! - [`reference_settings`]: 64×64 flat maze with moderate loops
//! - [`cube_settings`]: 16×16-per-face cube maze
//! - [`carved_flat`] / [`carved_cube`]: pre-carved mazes so distance
//!   benchmarks measure only the search

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use labyrinth_carve::carve_maze;
use labyrinth_core::SeededRng;
use labyrinth_engine::{MazeSettings, Shape};
use labyrinth_space::{CubeSurface, FlatGrid, Maze};

/// Flat 64×64 (4096 cells), 30% dead-end removal, full-length route.
pub fn reference_settings(seed: u64) -> MazeSettings {
    MazeSettings {
        dead_end_removal: 0.3,
        ..MazeSettings::seeded(Shape::Flat, 64, seed)
    }
}

/// Cube with 16×16 faces (1536 cells), 30% dead-end removal, half-length route.
pub fn cube_settings(seed: u64) -> MazeSettings {
    MazeSettings {
        dead_end_removal: 0.3,
        goal_distance_ratio: 0.5,
        ..MazeSettings::seeded(Shape::Cube, 16, seed)
    }
}

/// A carved flat maze of the given edge length.
pub fn carved_flat(size: u32, dead_end_removal: f32, seed: u64) -> Maze<FlatGrid> {
    let grid = FlatGrid::new(size).unwrap();
    carve_maze(grid, dead_end_removal, &mut SeededRng::new(seed)).0
}

/// A carved cube maze with the given face edge length.
pub fn carved_cube(size: u32, dead_end_removal: f32, seed: u64) -> Maze<CubeSurface> {
    let cube = CubeSurface::new(size).unwrap();
    carve_maze(cube, dead_end_removal, &mut SeededRng::new(seed)).0
}
