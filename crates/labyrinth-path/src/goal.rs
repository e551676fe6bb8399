//! Goal selection at a fraction of the maximum distance.

use crate::field::DistanceField;
use labyrinth_core::{pick, RandomSource};
use labyrinth_space::Topology;
use log::trace;

/// Ratios at or above this return a farthest cell outright.
pub const FARTHEST_RATIO: f32 = 0.99;

/// Lowest accepted ratio; smaller values are raised to it.
pub const MIN_RATIO: f32 = 0.5;

/// A goal cell chosen by [`select_goal_by_ratio`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalPick<C> {
    /// The chosen cell.
    pub cell: C,
    /// Its distance from the field's source.
    pub distance: u32,
}

/// The distance a goal at `ratio` of `max_distance` aims for, and the
/// half-width of the band accepted around it.
///
/// `ratio` is clamped to `[0.5, 1.0]`; NaN counts as 1.0. At or above
/// [`FARTHEST_RATIO`] the band collapses to `max_distance` itself.
/// Otherwise the target is `round(max_distance * ratio)`, at least 1,
/// and the tolerance is a fifth of the target, at least 1.
pub fn goal_band(max_distance: u32, ratio: f32) -> (u32, u32) {
    let ratio = if ratio.is_nan() {
        1.0
    } else {
        ratio.clamp(MIN_RATIO, 1.0)
    };
    if ratio >= FARTHEST_RATIO {
        return (max_distance, 0);
    }
    let target = ((f64::from(max_distance) * f64::from(ratio)).round() as u32).max(1);
    (target, (target / 5).max(1))
}

/// Pick a goal whose distance is close to `ratio` of `max_distance`.
///
/// Candidates are reached cells other than the source with distance at
/// most `max_distance`. The source is excluded even when the band reaches
/// down to 0 (a target of 1 with tolerance 1 spans `0..=2`), so a goal
/// is never the start cell while any other cell is reachable. Cells inside the band from [`goal_band`] are
/// preferred; if none fall inside, every candidate tied at the smallest
/// gap to the target is eligible instead. One candidate is drawn
/// uniformly. With no candidates at all the source itself is returned at
/// distance 0, so a goal is always produced when the source is a cell of
/// the maze. `None` means the source is not part of the maze.
pub fn select_goal_by_ratio<T, R>(
    field: &DistanceField<'_, T>,
    max_distance: u32,
    ratio: f32,
    rng: &mut R,
) -> Option<GoalPick<T::Cell>>
where
    T: Topology,
    R: RandomSource + ?Sized,
{
    let source = field.source();
    field.get(source)?;

    let candidates: Vec<(T::Cell, u32)> = field
        .reached()
        .filter(|&(_, d)| d > 0 && d <= max_distance)
        .collect();
    if candidates.is_empty() {
        trace!("goal: no candidates, falling back to source {source}");
        return Some(GoalPick {
            cell: source,
            distance: 0,
        });
    }

    let (target, tolerance) = goal_band(max_distance, ratio);
    let mut eligible: Vec<(T::Cell, u32)> = candidates
        .iter()
        .copied()
        .filter(|&(_, d)| d.abs_diff(target) <= tolerance)
        .collect();

    if eligible.is_empty() {
        let closest = candidates
            .iter()
            .map(|&(_, d)| d.abs_diff(target))
            .min()
            .unwrap_or(0);
        eligible = candidates
            .into_iter()
            .filter(|&(_, d)| d.abs_diff(target) == closest)
            .collect();
        trace!(
            "goal: band {target}±{tolerance} empty, {} cells at gap {closest}",
            eligible.len()
        );
    }

    pick(rng, &eligible).map(|&(cell, distance)| GoalPick { cell, distance })
}
