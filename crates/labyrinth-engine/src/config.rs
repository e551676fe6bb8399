//! Generation settings and their clamping rules.
//!
//! [`MazeSettings`] is what outer layers (UI panels, network commands)
//! hand over. Nothing in it is ever rejected:
//! [`sanitized()`](MazeSettings::sanitized) pulls every field into its
//! valid range, and the generator only ever sees sanitized settings.

use std::fmt;
use std::str::FromStr;

use labyrinth_space::MAX_GRID_SIZE;

use crate::error::ParseShapeError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest grid edge length a maze is carved at.
pub const MIN_GRID_SIZE: u32 = 2;

/// Smallest accepted cell size.
pub const MIN_CELL_SIZE: f32 = 0.1;

/// Smallest accepted wall height.
pub const MIN_WALL_HEIGHT: f32 = 0.1;

/// Smallest accepted wall thickness.
pub const MIN_WALL_THICKNESS: f32 = 0.02;

/// Walls may be at most this fraction of the cell size thick.
pub const MAX_WALL_THICKNESS_RATIO: f32 = 0.75;

/// Lowest accepted goal-distance ratio.
pub const MIN_GOAL_RATIO: f32 = 0.5;

// ── Shape ──────────────────────────────────────────────────────────

/// Which surface the maze is carved on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
    /// A single `size × size` grid with hard edges.
    #[default]
    Flat,
    /// Six `size × size` faces folded into a cube surface.
    Cube,
}

impl Shape {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Cube => "cube",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = ParseShapeError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("flat") {
            Ok(Self::Flat)
        } else if trimmed.eq_ignore_ascii_case("cube") {
            Ok(Self::Cube)
        } else {
            Err(ParseShapeError {
                input: trimmed.to_owned(),
            })
        }
    }
}

// ── MazeSettings ───────────────────────────────────────────────────

/// Everything one generation run needs.
///
/// Geometry fields (`cell_size`, `wall_height`, `wall_thickness`) are not
/// used by carving or routing; they are clamped here so downstream
/// geometry builders receive consistent values alongside the maze.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeSettings {
    /// Surface to carve on. Default: flat.
    pub shape: Shape,
    /// Cells along one edge (of the grid, or of each cube face). Default: 10.
    pub grid_size: u32,
    /// World-space edge length of a cell. Default: 1.0.
    pub cell_size: f32,
    /// World-space wall height. Default: 1.0.
    pub wall_height: f32,
    /// World-space wall thickness. Default: 0.1.
    pub wall_thickness: f32,
    /// Fraction of dead-ends to open up after carving, `[0, 1]`. Default: 0.
    pub dead_end_removal: f32,
    /// Goal distance as a fraction of the longest route, `[0.5, 1]`. Default: 1.
    pub goal_distance_ratio: f32,
    /// Draw a fresh seed per run instead of using `seed`. Default: true.
    pub use_random_seed: bool,
    /// Seed used when `use_random_seed` is false. Default: 0.
    pub seed: u64,
    /// Plan a start/goal route after carving. Default: true.
    pub compute_route: bool,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            shape: Shape::Flat,
            grid_size: 10,
            cell_size: 1.0,
            wall_height: 1.0,
            wall_thickness: 0.1,
            dead_end_removal: 0.0,
            goal_distance_ratio: 1.0,
            use_random_seed: true,
            seed: 0,
            compute_route: true,
        }
    }
}

impl MazeSettings {
    /// Settings that reproduce one fixed run: `use_random_seed` off.
    pub fn seeded(shape: Shape, grid_size: u32, seed: u64) -> Self {
        Self {
            shape,
            grid_size,
            use_random_seed: false,
            seed,
            ..Self::default()
        }
    }

    /// A copy with every field pulled into its valid range.
    ///
    /// Non-finite floats fall back to their defaults before clamping. Wall
    /// thickness is clamped against the already-clamped cell size.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let cell_size = finite_or(self.cell_size, defaults.cell_size).max(MIN_CELL_SIZE);
        let max_thickness = cell_size * MAX_WALL_THICKNESS_RATIO;
        Self {
            shape: self.shape,
            grid_size: self.grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE),
            cell_size,
            wall_height: finite_or(self.wall_height, defaults.wall_height).max(MIN_WALL_HEIGHT),
            wall_thickness: finite_or(self.wall_thickness, defaults.wall_thickness)
                .clamp(MIN_WALL_THICKNESS, max_thickness),
            dead_end_removal: finite_or(self.dead_end_removal, defaults.dead_end_removal)
                .clamp(0.0, 1.0),
            goal_distance_ratio: finite_or(self.goal_distance_ratio, defaults.goal_distance_ratio)
                .clamp(MIN_GOAL_RATIO, 1.0),
            use_random_seed: self.use_random_seed,
            seed: self.seed,
            compute_route: self.compute_route,
        }
    }

    /// World-space edge length of the whole grid (or of one cube face).
    pub fn extent(&self) -> f32 {
        self.grid_size as f32 * self.cell_size
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
