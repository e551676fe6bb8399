//! Contract checks every `Topology` backend must pass.
//!
//! Called from the test modules of `FlatGrid` and `CubeSurface` over a
//! range of sizes.

use crate::topology::{Step, Topology};
use indexmap::IndexSet;

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic<T: Topology>(space: &T) {
    let a = space.canonical_ordering();
    let b = space.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique cells.
pub fn assert_canonical_ordering_complete<T: Topology>(space: &T) {
    let ordering = space.canonical_ordering();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        space.cell_count(),
        "canonical_ordering has duplicates"
    );
}

/// Assert that `canonical_rank` inverts `cell_at` over the whole ordering.
pub fn assert_rank_round_trip<T: Topology>(space: &T) {
    for (i, cell) in space.canonical_ordering().into_iter().enumerate() {
        assert_eq!(
            space.canonical_rank(cell),
            Some(i),
            "canonical_rank({cell:?}) != {i}"
        );
    }
    assert_eq!(space.cell_at(space.cell_count()), None);
}

/// Assert that the origin is the first cell of the canonical ordering.
pub fn assert_origin_is_rank_zero<T: Topology>(space: &T) {
    assert_eq!(space.canonical_rank(space.origin()), Some(0));
}

/// Assert that stepping back along `back` returns to the start cell.
pub fn assert_neighbours_round_trip<T: Topology>(space: &T) {
    for cell in space.canonical_ordering() {
        for (dir, step) in space.neighbours(cell) {
            assert_ne!(step.cell, cell, "{cell:?} is its own {dir:?} neighbour");
            let back = space.neighbour(step.cell, step.back);
            assert_eq!(
                back,
                Some(Step { cell, back: dir }),
                "round trip violated: {cell:?} -{dir:?}-> {:?} -{:?}-> {back:?}",
                step.cell,
                step.back,
            );
        }
    }
}

/// Run all compliance checks on a topology.
pub fn run_full_compliance<T: Topology>(space: &T) {
    assert_canonical_ordering_deterministic(space);
    assert_canonical_ordering_complete(space);
    assert_rank_round_trip(space);
    assert_origin_is_rank_zero(space);
    assert_neighbours_round_trip(space);
}
