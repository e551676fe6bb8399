//! Test utilities for Labyrinth development.
//!
//! Provides a scripted [`RandomSource`] for pinning carving decisions,
//! maze invariant assertions shared by every crate's tests, and small
//! hand-built fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use labyrinth_core::RandomSource;
use labyrinth_space::{Maze, Topology};
use std::collections::VecDeque;

pub use fixtures::{corridor, fully_open, ring_with_spur};

/// A [`RandomSource`] replaying a fixed sequence of raw values.
///
/// Each call consumes the next value and reduces it modulo `bound`. When
/// the script runs out it cycles from the start; an empty script always
/// yields 0. Every call is recorded so tests can assert how many draws an
/// algorithm made and with which bounds.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
    bounds: Vec<usize>,
}

impl ScriptedRng {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
            bounds: Vec::new(),
        }
    }

    /// A source that always picks the first option.
    pub fn zeros() -> Self {
        Self::new(Vec::new())
    }

    /// Bounds passed to every `next_int` call so far, in order.
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.bounds.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_int(&mut self, bound: usize) -> usize {
        self.bounds.push(bound);
        if bound == 0 || self.script.is_empty() {
            return 0;
        }
        let raw = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        raw % bound
    }
}

/// Assert that every open wall is mirrored by the neighbour behind it.
pub fn assert_wall_symmetry<T: Topology>(maze: &Maze<T>) {
    let topo = maze.topology();
    for (cell, walls) in maze.iter() {
        for (dir, step) in topo.neighbours(cell) {
            let back = maze
                .walls(step.cell)
                .unwrap_or_else(|| panic!("neighbour {} of {cell} is not in the maze", step.cell));
            assert_eq!(
                walls.is_open(dir),
                back.is_open(step.back),
                "asymmetric wall: {cell} {dir} vs {} {}",
                step.cell,
                step.back
            );
        }
        for dir in walls.open_directions() {
            assert!(
                topo.neighbour(cell, dir).is_some(),
                "{cell} is open towards the {dir} boundary"
            );
        }
    }
}

/// Number of cells reachable from the topology origin through open walls.
pub fn reachable_count<T: Topology>(maze: &Maze<T>) -> usize {
    let topo = maze.topology();
    let mut seen = vec![false; maze.cell_count()];
    let mut queue = VecDeque::new();
    let origin = topo.origin();
    let Some(rank) = topo.canonical_rank(origin) else {
        return 0;
    };
    seen[rank] = true;
    queue.push_back(origin);
    let mut count = 1;
    while let Some(cell) = queue.pop_front() {
        for next in maze.open_neighbours(cell) {
            if let Some(r) = topo.canonical_rank(next) {
                if !seen[r] {
                    seen[r] = true;
                    count += 1;
                    queue.push_back(next);
                }
            }
        }
    }
    count
}

/// Assert that every cell is reachable from the origin.
pub fn assert_connected<T: Topology>(maze: &Maze<T>) {
    assert_eq!(
        reachable_count(maze),
        maze.cell_count(),
        "maze is not fully connected"
    );
}

/// Assert that the maze is a spanning tree: connected with `cells - 1` passages.
pub fn assert_perfect<T: Topology>(maze: &Maze<T>) {
    assert_connected(maze);
    assert_eq!(
        maze.passage_count(),
        maze.cell_count() - 1,
        "perfect maze must have exactly cells - 1 passages"
    );
}

/// Byte-level fingerprint of the wall configuration, in canonical order.
///
/// One byte per cell, bit `d` set when the wall towards direction `d` is
/// present.
pub fn wall_fingerprint<T: Topology>(maze: &Maze<T>) -> Vec<u8> {
    maze.iter()
        .map(|(_, walls)| {
            walls
                .closed_directions()
                .fold(0u8, |acc, dir| acc | (1 << dir.index()))
        })
        .collect()
}
