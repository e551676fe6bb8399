//! Error types for topology construction.

use labyrinth_core::{CubeCoord, Direction};
use std::fmt;

/// Errors arising from topology construction.
///
/// Neighbour lookups never produce these: a missing neighbour is a grid
/// boundary and is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a topology with zero cells.
    EmptySpace,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension was too large.
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// Folding across a cube edge did not land on any face.
    DegenerateFold {
        /// The cell the step started from.
        cell: CubeCoord,
        /// The step direction.
        direction: Direction,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::DegenerateFold { cell, direction } => {
                write!(f, "folding {direction} from {cell} did not land on a face")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
