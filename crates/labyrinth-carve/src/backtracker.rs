//! Randomized depth-first carving (recursive backtracker).
//!
//! ```text
//! visit(origin); push(origin)
//! while stack not empty:
//!     unvisited = neighbours(top) not yet visited
//!     if none: pop
//!     else: pick one uniformly, open the wall, visit it, push it
//! ```
//!
//! Gating is by visitation, not wall state. Every cell is visited exactly
//! once, so the opened walls form a spanning tree.

use crate::dead_ends::{remove_dead_ends, RemovalReport};
use labyrinth_core::{Direction, RandomSource};
use labyrinth_space::{Maze, Topology};
use log::debug;
use smallvec::SmallVec;

/// Carve a perfect maze over `topology`.
///
/// Starts from [`Topology::origin`] and draws one `next_int(k)` per
/// forward step, where `k` is the number of unvisited neighbours of the
/// current cell (in [`Direction::ALL`] order).
pub fn carve<T, R>(topology: T, rng: &mut R) -> Maze<T>
where
    T: Topology,
    R: RandomSource + ?Sized,
{
    let mut maze = Maze::new(topology);
    let origin = maze.topology().origin();
    let Some(origin_rank) = maze.topology().canonical_rank(origin) else {
        return maze;
    };

    let mut visited = vec![false; maze.cell_count()];
    let mut stack = vec![origin];
    visited[origin_rank] = true;

    while let Some(&current) = stack.last() {
        let topo = maze.topology();
        let candidates: SmallVec<[(Direction, usize); 4]> = topo
            .neighbours(current)
            .into_iter()
            .filter_map(|(dir, step)| topo.canonical_rank(step.cell).map(|rank| (dir, rank)))
            .filter(|(_, rank)| !visited[*rank])
            .collect();

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let (dir, rank) = candidates[rng.next_int(candidates.len())];
        visited[rank] = true;
        if let Some(next) = maze.open_passage(current, dir) {
            stack.push(next);
        }
    }

    debug!(
        "carved {} cells with {} passages",
        maze.cell_count(),
        maze.passage_count()
    );
    maze
}

/// Carve a maze and apply dead-end removal at `dead_end_removal` in one call.
///
/// The random source is consumed by carving first, then by removal.
pub fn carve_maze<T, R>(topology: T, dead_end_removal: f32, rng: &mut R) -> (Maze<T>, RemovalReport)
where
    T: Topology,
    R: RandomSource + ?Sized,
{
    let mut maze = carve(topology, rng);
    let report = remove_dead_ends(&mut maze, dead_end_removal, rng);
    (maze, report)
}
