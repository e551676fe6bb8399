//! Maze carving for Labyrinth.
//!
//! Two passes run over a fully walled [`Maze`](labyrinth_space::Maze):
//!
//! - [`carve`]: randomized depth-first recursive backtracker producing a
//!   spanning tree (a perfect maze) over any [`Topology`](labyrinth_space::Topology)
//! - [`remove_dead_ends`]: optional post-pass that opens walls at dead-ends,
//!   introducing cycles while never disconnecting anything
//!
//! Both consume a caller-supplied [`RandomSource`](labyrinth_core::RandomSource)
//! in a fixed sequence, so a seed fully determines the result.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backtracker;
pub mod dead_ends;

pub use backtracker::{carve, carve_maze};
pub use dead_ends::{removal_passes, remove_dead_ends, RemovalReport};
