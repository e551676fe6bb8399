//! Fixed per-face frames of the cube surface.
//!
//! Each face carries an outward `normal`, an in-plane `up` and the derived
//! `right = up × normal`. Cell `(x, y)` of a face sits at offset `x` along
//! `right` and `y` along `up`, centred on the face. The table is
//! process-wide immutable data indexed by [`Face`].

use glam::{DVec3, Vec3};
use labyrinth_core::{Direction, Face};

/// Immutable basis of one cube face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceOrientation {
    /// The face this frame belongs to.
    pub face: Face,
    /// Outward unit normal.
    pub normal: DVec3,
    /// In-plane unit vector pointing North.
    pub up: DVec3,
    /// In-plane unit vector pointing East, `up × normal`.
    pub right: DVec3,
}

static ORIENTATIONS: [FaceOrientation; 6] = [
    FaceOrientation {
        face: Face::Front,
        normal: DVec3::new(0.0, 0.0, 1.0),
        up: DVec3::new(0.0, 1.0, 0.0),
        right: DVec3::new(1.0, 0.0, 0.0),
    },
    FaceOrientation {
        face: Face::Right,
        normal: DVec3::new(1.0, 0.0, 0.0),
        up: DVec3::new(0.0, 1.0, 0.0),
        right: DVec3::new(0.0, 0.0, -1.0),
    },
    FaceOrientation {
        face: Face::Back,
        normal: DVec3::new(0.0, 0.0, -1.0),
        up: DVec3::new(0.0, 1.0, 0.0),
        right: DVec3::new(-1.0, 0.0, 0.0),
    },
    FaceOrientation {
        face: Face::Left,
        normal: DVec3::new(-1.0, 0.0, 0.0),
        up: DVec3::new(0.0, 1.0, 0.0),
        right: DVec3::new(0.0, 0.0, 1.0),
    },
    FaceOrientation {
        face: Face::Top,
        normal: DVec3::new(0.0, 1.0, 0.0),
        up: DVec3::new(0.0, 0.0, -1.0),
        right: DVec3::new(1.0, 0.0, 0.0),
    },
    FaceOrientation {
        face: Face::Bottom,
        normal: DVec3::new(0.0, -1.0, 0.0),
        up: DVec3::new(0.0, 0.0, 1.0),
        right: DVec3::new(1.0, 0.0, 0.0),
    },
];

/// The frame of `face`.
pub fn orientation(face: Face) -> &'static FaceOrientation {
    &ORIENTATIONS[face.index()]
}

/// The face whose outward normal is within ~25° of `normal`.
///
/// Returns `None` if `normal` is not close to any of the six axes.
pub fn face_for_normal(normal: DVec3) -> Option<Face> {
    ORIENTATIONS
        .iter()
        .find(|o| o.normal.dot(normal) > 0.9)
        .map(|o| o.face)
}

/// Centred offset of cell `index` along one face axis.
fn axis_offset(index: u32, size: u32, cell_size: f64) -> f64 {
    let half = size as f64 * cell_size / 2.0;
    -half + cell_size / 2.0 + index as f64 * cell_size
}

impl FaceOrientation {
    /// Unit vector of `dir` in this face's plane.
    pub fn direction_vector(&self, dir: Direction) -> DVec3 {
        match dir {
            Direction::North => self.up,
            Direction::South => -self.up,
            Direction::East => self.right,
            Direction::West => -self.right,
        }
    }

    /// Centre of cell `(x, y)` on a cube of `size` cells per edge, with the
    /// cube centred at the origin.
    pub fn cell_center_f64(&self, x: u32, y: u32, size: u32, cell_size: f64) -> DVec3 {
        let half = size as f64 * cell_size / 2.0;
        self.normal * half
            + self.right * axis_offset(x, size, cell_size)
            + self.up * axis_offset(y, size, cell_size)
    }

    /// Single-precision [`cell_center_f64`](Self::cell_center_f64) for
    /// geometry builders.
    pub fn cell_center(&self, x: u32, y: u32, size: u32, cell_size: f32) -> Vec3 {
        self.cell_center_f64(x, y, size, cell_size as f64).as_vec3()
    }

    /// Project a point on (or near) this face to integer cell indices,
    /// clamped to `[0, size - 1]`.
    pub fn project(&self, point: DVec3, size: u32, cell_size: f64) -> (u32, u32) {
        let half = size as f64 * cell_size / 2.0;
        let local = point - self.normal * half;
        let to_index = |offset: f64| -> u32 {
            let idx = ((offset + half) / cell_size).floor();
            idx.clamp(0.0, size.saturating_sub(1) as f64) as u32
        };
        (to_index(local.dot(self.right)), to_index(local.dot(self.up)))
    }

    /// Classify an in-plane vector as the closest compass direction.
    ///
    /// The axis with the larger absolute component wins; its sign picks
    /// the polarity. Ties go to North/South.
    pub fn classify(&self, v: DVec3) -> Direction {
        let up = v.dot(self.up);
        let right = v.dot(self.right);
        if up.abs() >= right.abs() {
            if up > 0.0 {
                Direction::North
            } else {
                Direction::South
            }
        } else if right > 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    }
}
