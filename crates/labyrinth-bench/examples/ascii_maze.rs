//! Generate a flat maze and print it with its route.
//!
//! Run with `RUST_LOG=debug` to see the pipeline's log lines.

use labyrinth_engine::{generate, MazeSettings, Shape};
use labyrinth_path::shortest_path;

fn main() {
    env_logger::init();

    let settings = MazeSettings {
        dead_end_removal: 0.25,
        goal_distance_ratio: 0.8,
        ..MazeSettings::seeded(Shape::Flat, 12, 2024)
    };
    let generated = generate(&settings).unwrap();
    let flat = generated.layout.as_flat().unwrap();

    println!("=== Labyrinth: 12×12, seed {} ===\n", generated.seed);
    println!("{}", flat.maze.render_ascii());
    println!(
        "passages: {}, dead-ends: {} (was {}), walls removed: {}",
        flat.maze.passage_count(),
        generated.removal.dead_ends_after,
        generated.removal.dead_ends_before,
        generated.removal.walls_removed,
    );

    if let Some(route) = flat.route {
        println!(
            "route: {} -> {} in {} steps",
            route.start, route.goal, route.distance
        );
        if let Some(path) = shortest_path(&flat.maze, route.start, route.goal) {
            let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!("path: {}", cells.join(" "));
        }
    }
}
