//! Flat `size × size` grid with hard boundaries.

use crate::error::SpaceError;
use crate::topology::{Step, Topology, MAX_GRID_SIZE};
use labyrinth_core::{Direction, GridCoord};

/// A square grid with 4-connected neighbourhood and no wrap-around.
///
/// Cells are `(x, y)` with `0 <= x, y < size`. Edge cells have fewer
/// neighbours (corners have 2, edges have 3). Canonical order is
/// row-major: `y` outer, `x` inner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatGrid {
    size: u32,
}

impl FlatGrid {
    /// Create a `size × size` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` for `size == 0` and
    /// `Err(SpaceError::DimensionTooLarge)` above [`MAX_GRID_SIZE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth_core::{Direction, GridCoord};
    /// use labyrinth_space::{FlatGrid, Topology};
    ///
    /// let grid = FlatGrid::new(4).unwrap();
    /// assert_eq!(grid.cell_count(), 16);
    /// assert!(grid.neighbour(GridCoord::new(0, 0), Direction::South).is_none());
    /// ```
    pub fn new(size: u32) -> Result<Self, SpaceError> {
        if size == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if size > MAX_GRID_SIZE {
            return Err(SpaceError::DimensionTooLarge {
                name: "size",
                value: size,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(Self { size })
    }

    fn contains(&self, cell: GridCoord) -> bool {
        cell.x < self.size && cell.y < self.size
    }
}

impl Topology for FlatGrid {
    type Cell = GridCoord;

    fn size(&self) -> u32 {
        self.size
    }

    fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    fn neighbour(&self, cell: GridCoord, dir: Direction) -> Option<Step<GridCoord>> {
        if !self.contains(cell) {
            return None;
        }
        let GridCoord { x, y } = cell;
        let next = match dir {
            Direction::North if y < self.size - 1 => GridCoord::new(x, y + 1),
            Direction::South if y > 0 => GridCoord::new(x, y - 1),
            Direction::East if x < self.size - 1 => GridCoord::new(x + 1, y),
            Direction::West if x > 0 => GridCoord::new(x - 1, y),
            _ => return None,
        };
        Some(Step {
            cell: next,
            back: dir.opposite(),
        })
    }

    fn canonical_rank(&self, cell: GridCoord) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.y as usize * self.size as usize + cell.x as usize)
    }

    fn cell_at(&self, rank: usize) -> Option<GridCoord> {
        if rank >= self.cell_count() {
            return None;
        }
        let size = self.size as usize;
        Some(GridCoord::new((rank % size) as u32, (rank / size) as u32))
    }

    fn origin(&self) -> GridCoord {
        GridCoord::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(x: u32, y: u32) -> GridCoord {
        GridCoord::new(x, y)
    }

    fn cells_of(grid: &FlatGrid, cell: GridCoord) -> Vec<GridCoord> {
        grid.neighbours(cell).into_iter().map(|(_, s)| s.cell).collect()
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let g = FlatGrid::new(5).unwrap();
        let n = cells_of(&g, c(2, 2));
        assert_eq!(n, vec![c(2, 3), c(3, 2), c(2, 1), c(1, 2)]);
    }

    #[test]
    fn neighbours_corner() {
        let g = FlatGrid::new(5).unwrap();
        assert_eq!(cells_of(&g, c(0, 0)), vec![c(0, 1), c(1, 0)]);
        assert_eq!(cells_of(&g, c(4, 4)), vec![c(4, 3), c(3, 4)]);
    }

    #[test]
    fn neighbours_edge() {
        let g = FlatGrid::new(5).unwrap();
        let n = cells_of(&g, c(2, 0));
        assert_eq!(n.len(), 3);
        assert!(!n.contains(&c(2, 0)));
    }

    #[test]
    fn boundary_directions_fail() {
        let g = FlatGrid::new(3).unwrap();
        assert!(g.neighbour(c(0, 1), Direction::West).is_none());
        assert!(g.neighbour(c(2, 1), Direction::East).is_none());
        assert!(g.neighbour(c(1, 2), Direction::North).is_none());
        assert!(g.neighbour(c(1, 0), Direction::South).is_none());
    }

    #[test]
    fn back_is_opposite() {
        let g = FlatGrid::new(3).unwrap();
        let step = g.neighbour(c(1, 1), Direction::North).unwrap();
        assert_eq!(step, Step { cell: c(1, 2), back: Direction::South });
    }

    #[test]
    fn out_of_bounds_cell_has_no_neighbours() {
        let g = FlatGrid::new(3).unwrap();
        assert!(g.neighbours(c(3, 0)).is_empty());
        assert_eq!(g.canonical_rank(c(0, 3)), None);
    }

    // ── Ordering tests ──────────────────────────────────────────

    #[test]
    fn canonical_ordering_is_row_major() {
        let g = FlatGrid::new(3).unwrap();
        let order = g.canonical_ordering();
        assert_eq!(&order[..4], &[c(0, 0), c(1, 0), c(2, 0), c(0, 1)]);
        assert_eq!(g.canonical_rank(c(2, 1)), Some(5));
        assert_eq!(g.cell_at(5), Some(c(2, 1)));
        assert_eq!(g.cell_at(9), None);
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_returns_error() {
        assert_eq!(FlatGrid::new(0), Err(SpaceError::EmptySpace));
    }

    #[test]
    fn new_rejects_oversized() {
        assert!(matches!(
            FlatGrid::new(MAX_GRID_SIZE + 1),
            Err(SpaceError::DimensionTooLarge { name: "size", .. })
        ));
        assert!(FlatGrid::new(MAX_GRID_SIZE).is_ok());
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let g = FlatGrid::new(1).unwrap();
        assert!(g.neighbours(c(0, 0)).is_empty());
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_small() {
        compliance::run_full_compliance(&FlatGrid::new(2).unwrap());
    }

    #[test]
    fn compliance_medium() {
        compliance::run_full_compliance(&FlatGrid::new(9).unwrap());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbour_round_trip(size in 1u32..12, x in 0u32..12, y in 0u32..12) {
            let g = FlatGrid::new(size).unwrap();
            let cell = c(x % size, y % size);
            for (dir, step) in g.neighbours(cell) {
                let back = g.neighbour(step.cell, step.back);
                prop_assert_eq!(back, Some(Step { cell, back: dir }));
            }
        }

        #[test]
        fn rank_round_trip(size in 1u32..20, rank in 0usize..400) {
            let g = FlatGrid::new(size).unwrap();
            match g.cell_at(rank) {
                Some(cell) => prop_assert_eq!(g.canonical_rank(cell), Some(rank)),
                None => prop_assert!(rank >= g.cell_count()),
            }
        }
    }
}
