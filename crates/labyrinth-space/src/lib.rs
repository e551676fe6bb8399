//! Spatial topologies and maze wall storage for Labyrinth.
//!
//! This crate defines the [`Topology`] trait, the neighbour-resolution
//! abstraction every carving and distance algorithm runs over, along with
//! the two concrete shapes and the [`Maze`] wall graph built on top of them.
//!
//! # Backends
//!
//! - [`FlatGrid`]: `size × size` grid with hard boundaries
//! - [`CubeSurface`]: six `size × size` faces folded into a closed cube,
//!   neighbours across face edges resolved by [`fold::fold_across_edge`]
//!
//! # Geometry
//!
//! [`FaceOrientation`] holds the fixed per-face basis (`normal`, `up`,
//! `right`). It drives edge folding and is exposed so geometry builders
//! can place walls and markers without re-deriving the frame.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cube;
pub mod error;
pub mod flat;
pub mod fold;
pub mod maze;
pub mod orientation;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use cube::CubeSurface;
pub use error::SpaceError;
pub use flat::FlatGrid;
pub use maze::Maze;
pub use orientation::{orientation, FaceOrientation};
pub use topology::{Step, Topology, MAX_GRID_SIZE};
