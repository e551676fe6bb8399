//! Cell identities for the flat grid and the cube surface.

use std::fmt;

/// A cell on the flat `size × size` grid.
///
/// `0 <= x, y < size`. Equality and hashing are structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column, growing eastwards.
    pub x: u32,
    /// Row, growing northwards.
    pub y: u32,
}

impl GridCoord {
    /// Construct a grid coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the six faces of the cube surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Faces `+Z`.
    Front = 0,
    /// Faces `+X`.
    Right = 1,
    /// Faces `-Z`.
    Back = 2,
    /// Faces `-X`.
    Left = 3,
    /// Faces `+Y`.
    Top = 4,
    /// Faces `-Y`.
    Bottom = 5,
}

impl Face {
    /// All six faces in canonical (face-major enumeration) order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Left,
        Face::Top,
        Face::Bottom,
    ];

    /// Stable index in `0..6`, matching the position in [`Face::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Front => "front",
            Face::Right => "right",
            Face::Back => "back",
            Face::Left => "left",
            Face::Top => "top",
            Face::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// A cell on the cube surface: a face plus an in-face `(x, y)`.
///
/// Equality and hashing cover all three fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeCoord {
    /// The face this cell lies on.
    pub face: Face,
    /// Column along the face's `right` axis.
    pub x: u32,
    /// Row along the face's `up` axis.
    pub y: u32,
}

impl CubeCoord {
    /// Construct a cube-surface coordinate.
    pub const fn new(face: Face, x: u32, y: u32) -> Self {
        Self { face, x, y }
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.face, self.x, self.y)
    }
}
