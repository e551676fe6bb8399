//! Breadth-first distance fields.

use labyrinth_space::{Maze, Topology};
use std::collections::VecDeque;

/// Sentinel stored for cells the search never reached.
pub const UNREACHED: i32 = -1;

/// Hop counts from a source cell to every cell of a maze.
///
/// Backed by a dense `i32` vector in canonical order. Unreached cells hold
/// [`UNREACHED`] and are reported as `None` by the typed accessors, so
/// they can never be mistaken for distance zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField<'a, T: Topology> {
    topology: &'a T,
    source: T::Cell,
    distances: Vec<i32>,
}

impl<'a, T: Topology> DistanceField<'a, T> {
    /// The cell the search started from.
    pub fn source(&self) -> T::Cell {
        self.source
    }

    /// The topology the field is laid out over.
    pub fn topology(&self) -> &'a T {
        self.topology
    }

    /// Distance to `cell`, or `None` if unreached or not part of the maze.
    pub fn get(&self, cell: T::Cell) -> Option<u32> {
        let rank = self.topology.canonical_rank(cell)?;
        self.distances
            .get(rank)
            .and_then(|&d| u32::try_from(d).ok())
    }

    /// Raw distances in canonical order, [`UNREACHED`] for unreached cells.
    pub fn as_slice(&self) -> &[i32] {
        &self.distances
    }

    /// Every reached cell with its distance, in canonical order.
    pub fn reached(&self) -> impl Iterator<Item = (T::Cell, u32)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(move |(rank, &d)| {
                let d = u32::try_from(d).ok()?;
                self.topology.cell_at(rank).map(|cell| (cell, d))
            })
    }

    /// Number of reached cells, including the source.
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != UNREACHED).count()
    }

    /// Largest finite distance, or `None` if nothing was reached.
    pub fn max_distance(&self) -> Option<u32> {
        self.distances
            .iter()
            .filter_map(|&d| u32::try_from(d).ok())
            .max()
    }

    /// All cells at [`max_distance`](Self::max_distance), in canonical order.
    pub fn farthest_cells(&self) -> Vec<T::Cell> {
        let Some(max) = self.max_distance() else {
            return Vec::new();
        };
        self.reached()
            .filter(|&(_, d)| d == max)
            .map(|(cell, _)| cell)
            .collect()
    }
}

/// Breadth-first search from `start`, moving only through open walls.
///
/// If `start` is not part of the maze every cell is left unreached.
pub fn compute_distances<T: Topology>(maze: &Maze<T>, start: T::Cell) -> DistanceField<'_, T> {
    let topology = maze.topology();
    let mut distances = vec![UNREACHED; maze.cell_count()];
    let mut queue = VecDeque::new();

    if let Some(rank) = topology.canonical_rank(start) {
        distances[rank] = 0;
        queue.push_back((start, 0i32));
    }

    while let Some((cell, dist)) = queue.pop_front() {
        for next in maze.open_neighbours(cell) {
            let Some(rank) = topology.canonical_rank(next) else {
                continue;
            };
            if distances[rank] == UNREACHED {
                distances[rank] = dist + 1;
                queue.push_back((next, dist + 1));
            }
        }
    }

    DistanceField {
        topology,
        source: start,
        distances,
    }
}
