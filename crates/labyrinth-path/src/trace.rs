//! Path recovery from distance fields.

use crate::field::{compute_distances, DistanceField};
use labyrinth_space::{Maze, Topology};

/// Walk `field` downhill from `goal` back to its source.
///
/// Returns the cells from the source to `goal`, both inclusive. At each
/// step the first open neighbour, in direction order, that is one hop
/// closer is taken, so the result is stable for a given maze. `None` if
/// `goal` was not reached by the field's search.
pub fn trace_path<T: Topology>(
    maze: &Maze<T>,
    field: &DistanceField<'_, T>,
    goal: T::Cell,
) -> Option<Vec<T::Cell>> {
    let mut remaining = field.get(goal)?;
    let mut path = Vec::with_capacity(remaining as usize + 1);
    let mut cell = goal;
    path.push(cell);

    while remaining > 0 {
        cell = maze
            .open_neighbours(cell)
            .into_iter()
            .find(|&next| field.get(next) == Some(remaining - 1))?;
        path.push(cell);
        remaining -= 1;
    }

    path.reverse();
    Some(path)
}

/// Shortest open path from `from` to `to`, both inclusive.
pub fn shortest_path<T: Topology>(
    maze: &Maze<T>,
    from: T::Cell,
    to: T::Cell,
) -> Option<Vec<T::Cell>> {
    let field = compute_distances(maze, from);
    trace_path(maze, &field, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_carve::{carve, carve_maze};
    use labyrinth_core::{GridCoord, SeededRng};
    use labyrinth_space::{CubeSurface, FlatGrid};
    use labyrinth_test_utils::{corridor, ring_with_spur};
    use proptest::prelude::*;

    fn c(x: u32, y: u32) -> GridCoord {
        GridCoord::new(x, y)
    }

    #[test]
    fn corridor_path_is_every_cell() {
        let maze = corridor(4);
        let path = shortest_path(&maze, c(0, 0), c(3, 0)).unwrap();
        assert_eq!(path, vec![c(0, 0), c(1, 0), c(2, 0), c(3, 0)]);
    }

    #[test]
    fn path_to_source_is_single_cell() {
        let maze = corridor(4);
        assert_eq!(shortest_path(&maze, c(2, 0), c(2, 0)), Some(vec![c(2, 0)]));
    }

    #[test]
    fn unreached_goal_has_no_path() {
        let maze = corridor(4);
        assert_eq!(shortest_path(&maze, c(0, 0), c(0, 3)), None);
    }

    #[test]
    fn ring_tie_takes_first_direction() {
        // (2,2) is four hops from (0,0) both ways round the ring. Walking
        // back from (2,2), North and East leave the grid; South to
        // (2,1) is tried before West to (1,2).
        let maze = ring_with_spur();
        let path = shortest_path(&maze, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(path, vec![c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(2, 2)]);
    }

    #[test]
    fn cube_path_is_connected() {
        let mut rng = SeededRng::new(7);
        let maze = carve(CubeSurface::new(3).unwrap(), &mut rng);
        let origin = maze.topology().origin();
        let field = compute_distances(&maze, origin);
        let far = field.farthest_cells()[0];
        let path = trace_path(&maze, &field, far).unwrap();
        assert_eq!(path.len() as u32, field.get(far).unwrap() + 1);
        for pair in path.windows(2) {
            assert!(maze.open_neighbours(pair[0]).contains(&pair[1]));
        }
    }

    proptest! {
        #[test]
        fn paths_step_through_open_walls(size in 2u32..9, seed in any::<u64>(), removal in 0.0f32..=1.0) {
            let mut rng = SeededRng::new(seed);
            let (maze, _) = carve_maze(FlatGrid::new(size).unwrap(), removal, &mut rng);
            let to = c(size - 1, size - 1);
            let field = compute_distances(&maze, c(0, 0));
            let path = trace_path(&maze, &field, to).unwrap();
            prop_assert_eq!(path.first(), Some(&c(0, 0)));
            prop_assert_eq!(path.last(), Some(&to));
            prop_assert_eq!(path.len() as u32, field.get(to).unwrap() + 1);
            for pair in path.windows(2) {
                prop_assert!(maze.open_neighbours(pair[0]).contains(&pair[1]));
            }
        }
    }
}
