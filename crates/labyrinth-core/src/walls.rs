//! Per-cell wall state.

use crate::direction::Direction;

/// Wall state of one maze cell: one flag per [`Direction`].
///
/// `true` means the wall is present (closed). A fresh cell is fully
/// walled. Walls between adjacent cells are kept symmetric by the owning
/// maze; a lone `Walls` value knows nothing about its neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Walls([bool; 4]);

impl Walls {
    /// All four walls present.
    pub const CLOSED: Walls = Walls([true; 4]);

    /// Returns `true` if the wall towards `dir` is present.
    pub fn is_closed(&self, dir: Direction) -> bool {
        self.0[dir.index()]
    }

    /// Returns `true` if there is a passage towards `dir`.
    pub fn is_open(&self, dir: Direction) -> bool {
        !self.0[dir.index()]
    }

    /// Set the wall towards `dir`.
    pub fn set(&mut self, dir: Direction, closed: bool) {
        self.0[dir.index()] = closed;
    }

    /// Number of open passages (0..=4).
    pub fn open_count(&self) -> usize {
        self.0.iter().filter(|closed| !**closed).count()
    }

    /// Number of walls present (0..=4).
    pub fn closed_count(&self) -> usize {
        4 - self.open_count()
    }

    /// A dead-end has exactly three walls, i.e. a single way out.
    pub fn is_dead_end(&self) -> bool {
        self.closed_count() == 3
    }

    /// Iterate the directions whose wall is present, in [`Direction::ALL`] order.
    pub fn closed_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.is_closed(*d))
    }

    /// Iterate the directions with an open passage, in [`Direction::ALL`] order.
    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.is_open(*d))
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::CLOSED
    }
}
