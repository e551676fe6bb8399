//! Dead-end removal: loosening a perfect maze into one with cycles.
//!
//! Runs `ceil(ratio * 3)` passes so that higher ratios get more chances
//! to cascade (opening one dead-end can expose another). Each pass:
//!
//! 1. collect the current dead-ends in canonical order
//! 2. Fisher–Yates shuffle them with the random source
//! 3. take the first `ceil(count * ratio / passes)`
//! 4. for each one still a dead-end, open a uniformly chosen closed wall
//!    that has a neighbour behind it
//!
//! Removal only ever adds passages, so connectivity is preserved and the
//! dead-end count never grows.

use labyrinth_core::{pick, shuffle, RandomSource};
use labyrinth_space::{Maze, Topology};
use log::trace;

/// Summary of a [`remove_dead_ends`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemovalReport {
    /// Passes the ratio called for.
    pub passes_planned: u32,
    /// Passes actually run before running out of dead-ends.
    pub passes_run: u32,
    /// Walls opened in total.
    pub walls_removed: usize,
    /// Dead-ends before the first pass.
    pub dead_ends_before: usize,
    /// Dead-ends after the last pass.
    pub dead_ends_after: usize,
}

/// Number of passes for a removal ratio: `ceil(ratio * 3)`, 0 when the
/// ratio is zero or not a number. The ratio is clamped to `[0, 1]`.
pub fn removal_passes(ratio: f32) -> u32 {
    let ratio = clamp_ratio(ratio);
    (ratio * 3.0).ceil() as u32
}

fn clamp_ratio(ratio: f32) -> f32 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Open walls at dead-ends of `maze`.
///
/// `ratio` is clamped to `[0, 1]`; at 0 the maze and the random source
/// are left untouched. Cells selected for a pass that stopped being
/// dead-ends earlier in the same pass (because a neighbour opened into
/// them) are skipped.
pub fn remove_dead_ends<T, R>(maze: &mut Maze<T>, ratio: f32, rng: &mut R) -> RemovalReport
where
    T: Topology,
    R: RandomSource + ?Sized,
{
    let ratio = clamp_ratio(ratio);
    let passes = removal_passes(ratio);
    let mut report = RemovalReport {
        passes_planned: passes,
        dead_ends_before: maze.dead_end_count(),
        ..RemovalReport::default()
    };

    for pass in 0..passes {
        let Some((quota, opened)) = removal_pass(maze, ratio, passes, rng) else {
            break;
        };
        report.passes_run += 1;
        report.walls_removed += opened;
        trace!("dead-end pass {pass}: quota {quota}, opened {opened}");
    }

    report.dead_ends_after = maze.dead_end_count();
    report
}

/// One pass of [`remove_dead_ends`] with an already clamped `ratio`.
///
/// Returns the pass quota and the number of walls opened, or `None` when
/// the maze has no dead-ends left.
fn removal_pass<T, R>(maze: &mut Maze<T>, ratio: f32, passes: u32, rng: &mut R) -> Option<(usize, usize)>
where
    T: Topology,
    R: RandomSource + ?Sized,
{
    let mut dead_ends = maze.dead_ends();
    if dead_ends.is_empty() {
        return None;
    }
    shuffle(rng, &mut dead_ends);

    let quota = (dead_ends.len() as f64 * ratio as f64 / passes as f64).ceil() as usize;
    let quota = quota.min(dead_ends.len());
    let mut opened = 0;
    for cell in dead_ends.into_iter().take(quota) {
        if !maze.walls(cell).is_some_and(|w| w.is_dead_end()) {
            continue;
        }
        let options = maze.closed_interior_walls(cell);
        if let Some(&dir) = pick(rng, &options) {
            if maze.open_passage(cell, dir).is_some() {
                opened += 1;
            }
        }
    }
    Some((quota, opened))
}
