//! The core `Topology` trait.

use labyrinth_core::Direction;
use smallvec::SmallVec;
use std::fmt;
use std::hash::Hash;

/// Largest accepted grid size per axis.
///
/// Keeps `6 × size²` within `i32::MAX` so distance fields can use an
/// `i32` sentinel.
pub const MAX_GRID_SIZE: u32 = 16_384;

/// The result of stepping from one cell towards a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step<C> {
    /// The neighbouring cell.
    pub cell: C,
    /// Direction, as seen from `cell`, that leads back to the origin of
    /// the step. On the flat grid this is always the opposite of the step
    /// direction; across a cube edge it is whatever the neighbour face's
    /// frame makes it.
    pub back: Direction,
}

/// Neighbour resolution over a finite set of maze cells.
///
/// Implementations must guarantee the round-trip property: if
/// `neighbour(a, d) == Some(Step { cell: b, back })` then
/// `neighbour(b, back) == Some(Step { cell: a, back: d })`.
pub trait Topology: Send + Sync + 'static {
    /// Cell identity for this shape.
    type Cell: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Cells per axis (per face, for the cube).
    fn size(&self) -> u32;

    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Resolve the neighbour of `cell` towards `dir`.
    ///
    /// `None` marks a hard boundary: that direction can never be carved
    /// from `cell`.
    fn neighbour(&self, cell: Self::Cell, dir: Direction) -> Option<Step<Self::Cell>>;

    /// Position of `cell` in the canonical ordering, or `None` if the
    /// cell does not belong to this topology.
    fn canonical_rank(&self, cell: Self::Cell) -> Option<usize>;

    /// Inverse of [`canonical_rank`](Self::canonical_rank).
    fn cell_at(&self, rank: usize) -> Option<Self::Cell>;

    /// The fixed cell carving starts from and distance analysis anchors on.
    fn origin(&self) -> Self::Cell;

    /// All cells in deterministic canonical order.
    ///
    /// Two calls on the same topology return the same sequence. Every
    /// enumeration that feeds the random source follows this order.
    fn canonical_ordering(&self) -> Vec<Self::Cell> {
        (0..self.cell_count())
            .filter_map(|rank| self.cell_at(rank))
            .collect()
    }

    /// All existing neighbours of `cell`, paired with the step direction,
    /// in [`Direction::ALL`] order.
    fn neighbours(&self, cell: Self::Cell) -> SmallVec<[(Direction, Step<Self::Cell>); 4]> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.neighbour(cell, dir).map(|step| (dir, step)))
            .collect()
    }
}
