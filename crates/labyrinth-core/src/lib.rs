//! Core types and traits for the Labyrinth maze engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Labyrinth workspace:
//! compass directions, cell identities for both shapes, per-cell wall
//! state, and the seeded random source that makes generation reproducible.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod rng;
pub mod walls;

pub use coord::{CubeCoord, Face, GridCoord};
pub use direction::Direction;
pub use rng::{pick, shuffle, RandomSource, SeededRng};
pub use walls::Walls;
