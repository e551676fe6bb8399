//! Exhaustive round-trip checks for the cube surface.
//!
//! For every cell and direction, stepping to the neighbour and then back
//! along the returned direction must land on the original cell.

use labyrinth_core::{CubeCoord, Direction, Face};
use labyrinth_space::{orientation, CubeSurface, Step, Topology};
use std::collections::HashMap;

#[test]
fn round_trip_holds_for_small_cubes() {
    for size in 1..=7 {
        let cube = CubeSurface::new(size).unwrap();
        for cell in cube.canonical_ordering() {
            for dir in Direction::ALL {
                let step = cube
                    .neighbour(cell, dir)
                    .unwrap_or_else(|| panic!("{cell} has no {dir} neighbour"));
                assert_eq!(
                    cube.neighbour(step.cell, step.back),
                    Some(Step { cell, back: dir }),
                    "size {size}: {cell} -{dir}-> {}",
                    step.cell
                );
            }
        }
    }
}

#[test]
fn every_cell_is_entered_exactly_four_times() {
    let cube = CubeSurface::new(5).unwrap();
    let mut incoming: HashMap<CubeCoord, usize> = HashMap::new();
    for cell in cube.canonical_ordering() {
        for (_, step) in cube.neighbours(cell) {
            *incoming.entry(step.cell).or_default() += 1;
        }
    }
    assert_eq!(incoming.len(), cube.cell_count());
    assert!(incoming.values().all(|&n| n == 4));
}

#[test]
fn edge_neighbours_are_geometrically_adjacent() {
    // Centres of neighbouring cells are one cell apart along the surface:
    // straight-line distance is 1 within a face, sqrt(0.5) across an edge.
    let size = 4;
    let cube = CubeSurface::new(size).unwrap();
    for cell in cube.canonical_ordering() {
        let a = orientation(cell.face).cell_center_f64(cell.x, cell.y, size, 1.0);
        for (_, step) in cube.neighbours(cell) {
            let n = step.cell;
            let b = orientation(n.face).cell_center_f64(n.x, n.y, size, 1.0);
            let d = a.distance(b);
            let expected = if n.face == cell.face { 1.0 } else { 0.5f64.sqrt() };
            assert!((d - expected).abs() < 1e-9, "{cell} -> {n}: {d}");
        }
    }
}

#[test]
fn each_face_borders_four_others() {
    let cube = CubeSurface::new(3).unwrap();
    for face in Face::ALL {
        let mut borders: Vec<Face> = cube
            .canonical_ordering()
            .into_iter()
            .filter(|c| c.face == face)
            .flat_map(|c| cube.neighbours(c))
            .map(|(_, s)| s.cell.face)
            .filter(|f| *f != face)
            .collect();
        borders.sort();
        borders.dedup();
        assert_eq!(borders.len(), 4, "{face}");
    }
}
