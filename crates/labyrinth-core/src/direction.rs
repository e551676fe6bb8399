//! The four planar compass directions.

use std::fmt;

/// A planar compass direction.
///
/// North and East point towards increasing `y` and `x` respectively, on
/// the flat grid and inside every cube face alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards `y + 1`.
    North = 0,
    /// Towards `x + 1`.
    East = 1,
    /// Towards `y - 1`.
    South = 2,
    /// Towards `x - 1`.
    West = 3,
}

impl Direction {
    /// All four directions in fixed iteration order.
    ///
    /// The order only affects which neighbour is listed first; every
    /// algorithm that iterates it must stay correct under any order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The reverse direction. `d.opposite().opposite() == d`.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Stable index in `0..4`, matching the position in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the `(dx, dy)` step for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// `true` for North and South.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_ne!(d, d.opposite());
            assert_eq!(d, d.opposite().opposite());
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn opposite_offsets_cancel() {
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            let (ox, oy) = d.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(d.is_vertical(), dx == 0);
        }
    }
}
