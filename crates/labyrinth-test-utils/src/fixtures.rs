//! Hand-built mazes with known distance structure.

use labyrinth_core::{Direction, GridCoord};
use labyrinth_space::{FlatGrid, Maze, Topology};

/// A `len × len` grid where only row 0 is carved: a straight corridor
/// from `(0, 0)` to `(len - 1, 0)`. Every other cell is isolated.
pub fn corridor(len: u32) -> Maze<FlatGrid> {
    let mut maze = Maze::new(FlatGrid::new(len).expect("len must be non-zero"));
    for x in 0..len.saturating_sub(1) {
        maze.open_passage(GridCoord::new(x, 0), Direction::East);
    }
    maze
}

/// A `size × size` grid with every interior wall removed.
pub fn fully_open(size: u32) -> Maze<FlatGrid> {
    let mut maze = Maze::new(FlatGrid::new(size).expect("size must be non-zero"));
    for cell in maze.topology().canonical_ordering() {
        maze.open_passage(cell, Direction::North);
        maze.open_passage(cell, Direction::East);
    }
    maze
}

/// A 3×3 grid: the outer ring of eight cells forms a loop, and the centre
/// hangs off `(1, 0)` as a single dead-end spur.
///
/// ```text
/// +---+---+---+
/// |           |
/// +   +---+   +
/// |   |   |   |
/// +   +   +   +
/// |           |
/// +---+---+---+
/// ```
pub fn ring_with_spur() -> Maze<FlatGrid> {
    let mut maze = Maze::new(FlatGrid::new(3).expect("3 is non-zero"));
    let ring = [
        (GridCoord::new(0, 0), Direction::East),
        (GridCoord::new(1, 0), Direction::East),
        (GridCoord::new(2, 0), Direction::North),
        (GridCoord::new(2, 1), Direction::North),
        (GridCoord::new(2, 2), Direction::West),
        (GridCoord::new(1, 2), Direction::West),
        (GridCoord::new(0, 2), Direction::South),
        (GridCoord::new(0, 1), Direction::South),
    ];
    for (cell, dir) in ring {
        maze.open_passage(cell, dir);
    }
    maze.open_passage(GridCoord::new(1, 0), Direction::North);
    maze
}
