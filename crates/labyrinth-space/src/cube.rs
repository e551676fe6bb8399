//! Six `size × size` faces folded into a closed cube surface.

use crate::error::SpaceError;
use crate::fold::fold_across_edge;
use crate::topology::{Step, Topology, MAX_GRID_SIZE};
use labyrinth_core::{CubeCoord, Direction, Face};

/// The surface of a cube, each face a `size × size` grid.
///
/// In-face steps follow the flat-grid rule. Steps that leave a face are
/// resolved by [`fold_across_edge`]; the results for every boundary cell
/// are computed once at construction and looked up afterwards. The
/// surface is closed, so every cell has exactly four neighbours.
///
/// Canonical order is face-major (in [`Face::ALL`] order), then row-major
/// within the face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeSurface {
    size: u32,
    /// Folded steps indexed by `(face * 4 + dir) * size + along`, where
    /// `along` is `x` for North/South edges and `y` for East/West edges.
    edges: Vec<Step<CubeCoord>>,
}

impl CubeSurface {
    /// Create a cube surface with `size × size` cells per face.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth_core::{CubeCoord, Direction, Face};
    /// use labyrinth_space::{CubeSurface, Topology};
    ///
    /// let cube = CubeSurface::new(3).unwrap();
    /// assert_eq!(cube.cell_count(), 54);
    ///
    /// // No boundaries: a corner cell still has four neighbours.
    /// let corner = CubeCoord::new(Face::Front, 0, 0);
    /// assert_eq!(cube.neighbours(corner).len(), 4);
    /// ```
    pub fn new(size: u32) -> Result<Self, SpaceError> {
        if size == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if size > MAX_GRID_SIZE {
            return Err(SpaceError::DimensionTooLarge {
                name: "size",
                value: size,
                max: MAX_GRID_SIZE,
            });
        }
        let mut edges = Vec::with_capacity(6 * 4 * size as usize);
        for face in Face::ALL {
            for dir in Direction::ALL {
                for along in 0..size {
                    let cell = match dir {
                        Direction::North => CubeCoord::new(face, along, size - 1),
                        Direction::South => CubeCoord::new(face, along, 0),
                        Direction::East => CubeCoord::new(face, size - 1, along),
                        Direction::West => CubeCoord::new(face, 0, along),
                    };
                    edges.push(fold_across_edge(cell, dir, size)?);
                }
            }
        }
        Ok(Self { size, edges })
    }

    fn contains(&self, cell: CubeCoord) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    fn edge_step(&self, cell: CubeCoord, dir: Direction) -> Option<Step<CubeCoord>> {
        let along = if dir.is_vertical() { cell.x } else { cell.y };
        let idx = (cell.face.index() * 4 + dir.index()) * self.size as usize + along as usize;
        self.edges.get(idx).copied()
    }
}

impl Topology for CubeSurface {
    type Cell = CubeCoord;

    fn size(&self) -> u32 {
        self.size
    }

    fn cell_count(&self) -> usize {
        6 * (self.size as usize) * (self.size as usize)
    }

    fn neighbour(&self, cell: CubeCoord, dir: Direction) -> Option<Step<CubeCoord>> {
        if !self.contains(cell) {
            return None;
        }
        let CubeCoord { face, x, y } = cell;
        let in_face = match dir {
            Direction::North if y < self.size - 1 => Some((x, y + 1)),
            Direction::South if y > 0 => Some((x, y - 1)),
            Direction::East if x < self.size - 1 => Some((x + 1, y)),
            Direction::West if x > 0 => Some((x - 1, y)),
            _ => None,
        };
        match in_face {
            Some((nx, ny)) => Some(Step {
                cell: CubeCoord::new(face, nx, ny),
                back: dir.opposite(),
            }),
            None => self.edge_step(cell, dir),
        }
    }

    fn canonical_rank(&self, cell: CubeCoord) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let size = self.size as usize;
        Some(cell.face.index() * size * size + cell.y as usize * size + cell.x as usize)
    }

    fn cell_at(&self, rank: usize) -> Option<CubeCoord> {
        if rank >= self.cell_count() {
            return None;
        }
        let size = self.size as usize;
        let face = Face::ALL[rank / (size * size)];
        let within = rank % (size * size);
        Some(CubeCoord::new(
            face,
            (within % size) as u32,
            (within / size) as u32,
        ))
    }

    fn origin(&self) -> CubeCoord {
        CubeCoord::new(Face::Front, 0, 0)
    }
}
