//! The maze wall graph over a topology.

use crate::flat::FlatGrid;
use crate::topology::Topology;
use labyrinth_core::{Direction, GridCoord, Walls};
use smallvec::SmallVec;

/// Wall state for every cell of a topology.
///
/// Storage is a dense `Vec<Walls>` indexed by canonical rank, for both
/// shapes. Walls are only ever changed through
/// [`open_passage`](Self::open_passage), which updates both sides, so
/// `A` open towards `B` always implies `B` open back towards `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze<T: Topology> {
    topology: T,
    cells: Vec<Walls>,
}

impl<T: Topology> Maze<T> {
    /// A fully walled maze over `topology`.
    pub fn new(topology: T) -> Self {
        let cells = vec![Walls::CLOSED; topology.cell_count()];
        Self { topology, cells }
    }

    /// The underlying topology.
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// Cells per axis (per face, for the cube).
    pub fn size(&self) -> u32 {
        self.topology.size()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Wall state of `cell`, or `None` if the cell is not part of the maze.
    pub fn walls(&self, cell: T::Cell) -> Option<Walls> {
        let rank = self.topology.canonical_rank(cell)?;
        self.walls_at(rank)
    }

    /// Wall state by canonical rank.
    pub fn walls_at(&self, rank: usize) -> Option<Walls> {
        self.cells.get(rank).copied()
    }

    /// `true` if there is a passage from `cell` towards `dir`.
    pub fn is_open(&self, cell: T::Cell, dir: Direction) -> bool {
        self.walls(cell).is_some_and(|w| w.is_open(dir))
    }

    /// Open the wall between `cell` and its neighbour towards `dir`, on
    /// both sides.
    ///
    /// Returns the neighbour, or `None` (leaving every wall untouched) if
    /// `dir` leads off a boundary.
    pub fn open_passage(&mut self, cell: T::Cell, dir: Direction) -> Option<T::Cell> {
        let step = self.topology.neighbour(cell, dir)?;
        let from = self.topology.canonical_rank(cell)?;
        let to = self.topology.canonical_rank(step.cell)?;
        self.cells[from].set(dir, false);
        self.cells[to].set(step.back, false);
        Some(step.cell)
    }

    /// Cells reachable in one move from `cell` through open walls.
    pub fn open_neighbours(&self, cell: T::Cell) -> SmallVec<[T::Cell; 4]> {
        let Some(walls) = self.walls(cell) else {
            return SmallVec::new();
        };
        walls
            .open_directions()
            .filter_map(|dir| self.topology.neighbour(cell, dir))
            .map(|step| step.cell)
            .collect()
    }

    /// Closed walls of `cell` that have a neighbour behind them.
    pub fn closed_interior_walls(&self, cell: T::Cell) -> SmallVec<[Direction; 4]> {
        let Some(walls) = self.walls(cell) else {
            return SmallVec::new();
        };
        walls
            .closed_directions()
            .filter(|dir| self.topology.neighbour(cell, *dir).is_some())
            .collect()
    }

    /// Every cell with its walls, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (T::Cell, Walls)> + '_ {
        (0..self.cells.len())
            .filter_map(move |rank| Some((self.topology.cell_at(rank)?, self.walls_at(rank)?)))
    }

    /// Number of open passages, each counted once.
    pub fn passage_count(&self) -> usize {
        self.cells.iter().map(Walls::open_count).sum::<usize>() / 2
    }

    /// All dead-end cells in canonical order.
    pub fn dead_ends(&self) -> Vec<T::Cell> {
        self.iter()
            .filter(|(_, walls)| walls.is_dead_end())
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Number of dead-end cells.
    pub fn dead_end_count(&self) -> usize {
        self.cells.iter().filter(|w| w.is_dead_end()).count()
    }
}

impl Maze<FlatGrid> {
    /// Text rendering of a flat maze, North at the top.
    ///
    /// ```text
    /// +---+---+
    /// |   |   |
    /// +---+   +
    /// |       |
    /// +---+---+
    /// ```
    pub fn render_ascii(&self) -> String {
        let size = self.size();
        let mut out = String::new();
        let wall = |x: u32, y: u32, dir: Direction| {
            self.walls(GridCoord::new(x, y))
                .is_none_or(|w| w.is_closed(dir))
        };
        for y in (0..size).rev() {
            for x in 0..size {
                out.push('+');
                out.push_str(if wall(x, y, Direction::North) { "---" } else { "   " });
            }
            out.push_str("+\n");
            for x in 0..size {
                out.push(if wall(x, y, Direction::West) { '|' } else { ' ' });
                out.push_str("   ");
            }
            out.push(if wall(size - 1, y, Direction::East) { '|' } else { ' ' });
            out.push('\n');
        }
        for x in 0..size {
            out.push('+');
            out.push_str(if wall(x, 0, Direction::South) { "---" } else { "   " });
        }
        out.push_str("+\n");
        out
    }
}
