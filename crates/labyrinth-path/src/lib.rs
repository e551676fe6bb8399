//! Distance analysis over finished Labyrinth mazes.
//!
//! Everything here is read-only over a [`Maze`](labyrinth_space::Maze):
//!
//! - [`compute_distances`]: breadth-first hop counts through open walls
//! - [`find_diameter_endpoints`]: double-BFS estimate of the two most
//!   distant cells
//! - [`select_goal_by_ratio`]: pick a goal at a fraction of the maximum
//!   distance, within a tolerance band
//! - [`trace_path`]: recover the cell sequence from a distance field
//!
//! Randomness is used only to break ties.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diameter;
pub mod field;
pub mod goal;
pub mod trace;

pub use diameter::{find_diameter_endpoints, DiameterEndpoints};
pub use field::{compute_distances, DistanceField, UNREACHED};
pub use goal::{goal_band, select_goal_by_ratio, GoalPick};
pub use trace::{shortest_path, trace_path};
