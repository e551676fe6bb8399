//! Edge folding: stepping off one cube face onto its neighbour.
//!
//! A step that leaves a face is resolved geometrically. The source cell
//! centre and its face normal are rotated about the shared edge (the hinge
//! between the two faces) and the rotated point is projected onto the
//! neighbour face's own axes:
//!
//! ```text
//! center   = normal·half + right·offset_x + up·offset_y
//! edge_mid = center + step·(cell_size / 2)
//! hinge    = normalize(step × normal)
//! normal'  = rot(hinge, FOLD_ANGLE) · normal          → neighbour face
//! center'  = edge_mid + rot(hinge, FOLD_ANGLE) · (center − edge_mid)
//! (nx, ny) = clamp(project(center', neighbour))
//! back     = classify(rot(hinge, FOLD_ANGLE) · −step, neighbour)
//! ```
//!
//! The result is independent of the cell size, so folding is done on
//! unit cells.

use crate::error::SpaceError;
use crate::orientation::{face_for_normal, orientation};
use crate::topology::Step;
use glam::DQuat;
use labyrinth_core::{CubeCoord, Direction};

/// Rotation applied about the hinge axis, in radians (-90°).
pub const FOLD_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;

const UNIT_CELL: f64 = 1.0;

/// Resolve the neighbour of `cell` towards `dir` by folding across the
/// face edge.
///
/// Meant for steps that leave the face, but well defined for any cell:
/// the projection clamps into the neighbour face. Returns
/// `SpaceError::DegenerateFold` if the rotated normal matches no face,
/// which cannot happen for the fixed orientation table.
pub fn fold_across_edge(
    cell: CubeCoord,
    dir: Direction,
    size: u32,
) -> Result<Step<CubeCoord>, SpaceError> {
    let frame = orientation(cell.face);
    let center = frame.cell_center_f64(cell.x, cell.y, size, UNIT_CELL);
    let step = frame.direction_vector(dir);
    let edge_mid = center + step * (UNIT_CELL / 2.0);
    let hinge = DQuat::from_axis_angle(step.cross(frame.normal).normalize(), FOLD_ANGLE);

    let face = face_for_normal(hinge * frame.normal)
        .ok_or(SpaceError::DegenerateFold { cell, direction: dir })?;
    let target = orientation(face);

    let folded = edge_mid + hinge * (center - edge_mid);
    let (x, y) = target.project(folded, size, UNIT_CELL);
    let back = target.classify(hinge * -step);

    Ok(Step {
        cell: CubeCoord::new(face, x, y),
        back,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::Face;

    fn cc(face: Face, x: u32, y: u32) -> CubeCoord {
        CubeCoord::new(face, x, y)
    }

    #[test]
    fn front_west_edge_lands_on_left() {
        let step = fold_across_edge(cc(Face::Front, 0, 0), Direction::West, 3).unwrap();
        assert_eq!(step.cell, cc(Face::Left, 2, 0));
        assert_eq!(step.back, Direction::East);
    }

    #[test]
    fn front_north_edge_lands_on_top() {
        let step = fold_across_edge(cc(Face::Front, 2, 2), Direction::North, 3).unwrap();
        assert_eq!(step.cell, cc(Face::Top, 2, 0));
        assert_eq!(step.back, Direction::South);
    }

    #[test]
    fn top_south_edge_lands_on_front() {
        let step = fold_across_edge(cc(Face::Top, 1, 0), Direction::South, 3).unwrap();
        assert_eq!(step.cell, cc(Face::Front, 1, 2));
        assert_eq!(step.back, Direction::North);
    }

    #[test]
    fn equatorial_ring_wraps() {
        // Walking east along row 0 of the four side faces returns home.
        let size = 2;
        let mut cell = cc(Face::Front, 1, 0);
        let mut visited = Vec::new();
        for _ in 0..4 {
            let step = fold_across_edge(cell, Direction::East, size).unwrap();
            assert_eq!(step.back, Direction::West);
            cell = CubeCoord::new(step.cell.face, size - 1, step.cell.y);
            visited.push(step.cell.face);
        }
        assert_eq!(visited, vec![Face::Right, Face::Back, Face::Left, Face::Front]);
    }

    #[test]
    fn fold_preserves_edge_coordinate() {
        // Moving along the shared edge moves along the neighbour's edge too.
        let size = 5;
        let landed: Vec<CubeCoord> = (0..size)
            .map(|y| fold_across_edge(cc(Face::Right, size - 1, y), Direction::East, size))
            .map(|r| r.unwrap().cell)
            .collect();
        for (y, cell) in landed.iter().enumerate() {
            assert_eq!(cell.face, Face::Back);
            assert_eq!(cell.x, 0);
            assert_eq!(cell.y, y as u32);
        }
    }

    #[test]
    fn single_cell_faces_reach_four_distinct_faces() {
        for face in Face::ALL {
            let mut faces: Vec<Face> = Direction::ALL
                .into_iter()
                .map(|d| fold_across_edge(cc(face, 0, 0), d, 1).unwrap().cell.face)
                .collect();
            faces.sort();
            faces.dedup();
            assert_eq!(faces.len(), 4, "{face}");
            assert!(!faces.contains(&face));
        }
    }
}
