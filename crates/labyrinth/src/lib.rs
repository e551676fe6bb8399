//! Labyrinth: procedural maze topology and pathfinding.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Labyrinth sub-crates. For most users, adding `labyrinth` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use labyrinth::prelude::*;
//!
//! // A reproducible 6×6 perfect maze with a start/goal route.
//! let settings = MazeSettings::seeded(Shape::Flat, 6, 42);
//! let generated = generate(&settings).unwrap();
//! assert_eq!(generated.layout.passage_count(), 35);
//!
//! let flat = generated.layout.as_flat().unwrap();
//! let route = flat.route.unwrap();
//! let path = shortest_path(&flat.maze, route.start, route.goal).unwrap();
//! assert_eq!(path.len() as u32, route.distance + 1);
//! ```
//!
//! Lower-level pieces can be driven directly:
//!
//! ```rust
//! use labyrinth::prelude::*;
//!
//! let mut rng = SeededRng::new(7);
//! let maze = carve(CubeSurface::new(3).unwrap(), &mut rng);
//! assert_eq!(maze.passage_count(), 53);
//!
//! let ends = find_diameter_endpoints(&maze, &mut rng);
//! assert!(ends.distance > 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `labyrinth-core` | Directions, cell coordinates, walls, random sources |
//! | [`space`] | `labyrinth-space` | Flat and cube topologies, face frames, the maze wall graph |
//! | [`carve`] | `labyrinth-carve` | Recursive backtracker and dead-end removal |
//! | [`path`] | `labyrinth-path` | Distance fields, diameter endpoints, goal selection |
//! | [`engine`] | `labyrinth-engine` | Settings, the generation pipeline and its observer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Leaf types (`labyrinth-core`).
///
/// [`types::Direction`], the cell keys [`types::GridCoord`] and
/// [`types::CubeCoord`], [`types::Walls`], and the
/// [`types::RandomSource`] abstraction with its seeded implementation.
pub use labyrinth_core as types;

/// Topologies and the maze wall graph (`labyrinth-space`).
///
/// The [`space::Topology`] trait with [`space::FlatGrid`] and
/// [`space::CubeSurface`], per-face [`space::FaceOrientation`] frames, and
/// [`space::Maze`].
pub use labyrinth_space as space;

/// Maze carving (`labyrinth-carve`).
pub use labyrinth_carve as carve;

/// Distance analysis (`labyrinth-path`).
///
/// BFS [`path::DistanceField`]s, [`path::find_diameter_endpoints`] and
/// [`path::select_goal_by_ratio`].
pub use labyrinth_path as path;

/// The generation pipeline (`labyrinth-engine`).
///
/// [`engine::MazeSettings`] in, [`engine::GeneratedMaze`] out, through
/// [`engine::MazeGenerator`].
pub use labyrinth_engine as engine;

/// Common imports for typical Labyrinth usage.
///
/// ```rust
/// use labyrinth::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use labyrinth_core::{
        CubeCoord, Direction, Face, GridCoord, RandomSource, SeededRng, Walls,
    };

    // Space
    pub use labyrinth_space::{CubeSurface, FaceOrientation, FlatGrid, Maze, SpaceError, Topology};

    // Carving
    pub use labyrinth_carve::{carve, carve_maze, remove_dead_ends, RemovalReport};

    // Distances
    pub use labyrinth_path::{
        compute_distances, find_diameter_endpoints, select_goal_by_ratio, shortest_path,
        trace_path, DistanceField,
    };

    // Engine
    pub use labyrinth_engine::{
        generate, GenerateError, GeneratedMaze, MazeGenerator, MazeLayout, MazeSettings, Route,
        Shape,
    };
}
