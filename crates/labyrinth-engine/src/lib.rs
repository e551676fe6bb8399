//! Maze generation pipeline for Labyrinth.
//!
//! Turns raw [`MazeSettings`] into a finished [`GeneratedMaze`]: settings
//! are clamped, a seed is chosen, the maze is carved over the requested
//! [`Shape`], dead-ends are optionally removed, and a start/goal route is
//! planned. Generation is one synchronous call; a single observer can be
//! registered on [`MazeGenerator`] to be told when it completes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod generator;

pub use config::{MazeSettings, Shape};
pub use error::{GenerateError, ParseShapeError};
pub use generator::{generate, GeneratedMaze, MazeGenerator, MazeLayout, Route, ShapedMaze};
