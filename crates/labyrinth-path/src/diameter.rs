//! Double-BFS estimate of the maze diameter.
//!
//! BFS from the topology origin, pick a farthest cell `a`; BFS from `a`,
//! pick a farthest cell `b`. On a tree `a`–`b` is a true diameter. Once
//! dead-end removal has added cycles it is only an approximation; callers
//! tune difficulty against this exact procedure, so it is kept as is.

use crate::field::compute_distances;
use labyrinth_core::{pick, RandomSource};
use labyrinth_space::{Maze, Topology};
use log::debug;

/// The two endpoints found by [`find_diameter_endpoints`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiameterEndpoints<C> {
    /// One end of the path.
    pub start: C,
    /// The other end.
    pub end: C,
    /// Hop count between them.
    pub distance: u32,
}

/// Find two mutually distant cells of `maze`.
///
/// Random draws, in order: tie-break among farthest cells of the first
/// search, tie-break among farthest cells of the second search, then a
/// coin flip that swaps `start` and `end`. Draws happen even when a tie
/// set has a single member.
pub fn find_diameter_endpoints<T, R>(maze: &Maze<T>, rng: &mut R) -> DiameterEndpoints<T::Cell>
where
    T: Topology,
    R: RandomSource + ?Sized,
{
    let anchor = maze.topology().origin();

    let first = compute_distances(maze, anchor);
    let a = pick(rng, &first.farthest_cells()).copied().unwrap_or(anchor);

    let second = compute_distances(maze, a);
    let b = pick(rng, &second.farthest_cells()).copied().unwrap_or(a);
    let distance = second.get(b).unwrap_or(0);

    let (start, end) = if rng.next_int(2) == 1 { (b, a) } else { (a, b) };
    debug!("diameter: {start} to {end}, {distance} hops");
    DiameterEndpoints {
        start,
        end,
        distance,
    }
}
