//! Errors surfaced by the generation pipeline.

use std::error::Error;
use std::fmt;

use labyrinth_space::SpaceError;

/// Errors from [`MazeGenerator::generate`](crate::MazeGenerator::generate).
///
/// Settings are clamped rather than rejected, so the only failure left is
/// the topology refusing to build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The grid or cube surface could not be constructed.
    Space(SpaceError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "topology: {e}"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
        }
    }
}

impl From<SpaceError> for GenerateError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

/// A shape name that is neither `flat` nor `cube`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseShapeError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl fmt::Display for ParseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown maze shape '{}' (expected flat or cube)",
            self.input
        )
    }
}

impl Error for ParseShapeError {}
