//! The generation pipeline: settings in, finished maze out.

use std::fmt;

use labyrinth_carve::{carve_maze, RemovalReport};
use labyrinth_core::{RandomSource, SeededRng};
use labyrinth_path::{compute_distances, find_diameter_endpoints, select_goal_by_ratio};
use labyrinth_space::{CubeSurface, FlatGrid, Maze, Topology};
use log::debug;

use crate::config::{MazeSettings, Shape};
use crate::error::GenerateError;

// ── Output types ───────────────────────────────────────────────────

/// Start and goal cells chosen for a maze, with the hop count between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route<C> {
    /// One end of the estimated diameter.
    pub start: C,
    /// A cell at the requested fraction of the longest distance from `start`.
    pub goal: C,
    /// Shortest-path hops from `start` to `goal`.
    pub distance: u32,
}

/// A finished maze over one concrete topology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapedMaze<T: Topology> {
    /// The wall graph. Read-only from here on.
    pub maze: Maze<T>,
    /// Present when route planning was requested.
    pub route: Option<Route<T::Cell>>,
}

/// The maze produced for each [`Shape`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeLayout {
    /// A flat grid maze.
    Flat(ShapedMaze<FlatGrid>),
    /// A cube surface maze.
    Cube(ShapedMaze<CubeSurface>),
}

impl MazeLayout {
    /// The shape this layout was carved on.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Flat(_) => Shape::Flat,
            Self::Cube(_) => Shape::Cube,
        }
    }

    /// The flat maze, if this is one.
    pub fn as_flat(&self) -> Option<&ShapedMaze<FlatGrid>> {
        match self {
            Self::Flat(m) => Some(m),
            Self::Cube(_) => None,
        }
    }

    /// The cube maze, if this is one.
    pub fn as_cube(&self) -> Option<&ShapedMaze<CubeSurface>> {
        match self {
            Self::Cube(m) => Some(m),
            Self::Flat(_) => None,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        match self {
            Self::Flat(m) => m.maze.cell_count(),
            Self::Cube(m) => m.maze.cell_count(),
        }
    }

    /// Number of open passages.
    pub fn passage_count(&self) -> usize {
        match self {
            Self::Flat(m) => m.maze.passage_count(),
            Self::Cube(m) => m.maze.passage_count(),
        }
    }

    /// Number of cells with exactly one open wall.
    pub fn dead_end_count(&self) -> usize {
        match self {
            Self::Flat(m) => m.maze.dead_end_count(),
            Self::Cube(m) => m.maze.dead_end_count(),
        }
    }

    /// Hop count of the planned route, if one was planned.
    pub fn route_distance(&self) -> Option<u32> {
        match self {
            Self::Flat(m) => m.route.map(|r| r.distance),
            Self::Cube(m) => m.route.map(|r| r.distance),
        }
    }
}

/// Everything one generation run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedMaze {
    /// The carved maze and its route.
    pub layout: MazeLayout,
    /// The seed actually used. Feeding it back with `use_random_seed` off
    /// reproduces this maze exactly.
    pub seed: u64,
    /// The sanitized settings the run used.
    pub settings: MazeSettings,
    /// What dead-end removal did.
    pub removal: RemovalReport,
}

impl GeneratedMaze {
    /// Settings that regenerate this exact maze.
    pub fn replay_settings(&self) -> MazeSettings {
        MazeSettings {
            use_random_seed: false,
            seed: self.seed,
            ..self.settings.clone()
        }
    }
}

// ── MazeGenerator ──────────────────────────────────────────────────

type Observer = Box<dyn FnMut(&GeneratedMaze) + Send>;

/// Runs the generation pipeline and notifies a single observer.
///
/// Each [`generate`](Self::generate) call is independent: a fresh random
/// stream is seeded for it and a fresh maze is built. The observer, if
/// any, is invoked synchronously once per successful call, after the maze
/// is complete and before it is returned.
#[derive(Default)]
pub struct MazeGenerator {
    observer: Option<Observer>,
}

impl fmt::Debug for MazeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MazeGenerator")
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl MazeGenerator {
    /// A generator with no observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the completion observer, replacing any previous one.
    pub fn on_generated(mut self, observer: impl FnMut(&GeneratedMaze) + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Generate a maze from `settings`.
    ///
    /// Settings are sanitized first. The random stream is consumed in a
    /// fixed order (carving, dead-end removal, diameter search, goal
    /// pick), so the same seed and settings always give the same result.
    pub fn generate(&mut self, settings: &MazeSettings) -> Result<GeneratedMaze, GenerateError> {
        let settings = settings.sanitized();
        let seed = if settings.use_random_seed {
            rand::random::<u64>()
        } else {
            settings.seed
        };
        let mut rng = SeededRng::new(seed);

        let (layout, removal) = match settings.shape {
            Shape::Flat => {
                let (maze, removal) = build(FlatGrid::new(settings.grid_size)?, &settings, &mut rng);
                (MazeLayout::Flat(maze), removal)
            }
            Shape::Cube => {
                let (maze, removal) =
                    build(CubeSurface::new(settings.grid_size)?, &settings, &mut rng);
                (MazeLayout::Cube(maze), removal)
            }
        };

        debug!(
            "generated {} maze: size {}, seed {seed}, {} passages, {} walls removed, route {:?}",
            settings.shape,
            settings.grid_size,
            layout.passage_count(),
            removal.walls_removed,
            layout.route_distance(),
        );

        let generated = GeneratedMaze {
            layout,
            seed,
            settings,
            removal,
        };
        if let Some(observer) = self.observer.as_mut() {
            observer(&generated);
        }
        Ok(generated)
    }
}

/// Generate a maze from `settings` without an observer.
pub fn generate(settings: &MazeSettings) -> Result<GeneratedMaze, GenerateError> {
    MazeGenerator::new().generate(settings)
}

fn build<T, R>(topology: T, settings: &MazeSettings, rng: &mut R) -> (ShapedMaze<T>, RemovalReport)
where
    T: Topology,
    R: RandomSource + ?Sized,
{
    let (maze, removal) = carve_maze(topology, settings.dead_end_removal, rng);
    let route = settings
        .compute_route
        .then(|| plan_route(&maze, settings.goal_distance_ratio, rng));
    (ShapedMaze { maze, route }, removal)
}

/// Start at one end of the estimated diameter, then pick a goal at
/// `ratio` of the longest distance from that start.
fn plan_route<T, R>(maze: &Maze<T>, ratio: f32, rng: &mut R) -> Route<T::Cell>
where
    T: Topology,
    R: RandomSource + ?Sized,
{
    let ends = find_diameter_endpoints(maze, rng);
    let field = compute_distances(maze, ends.start);
    let max = field.max_distance().unwrap_or(0);
    match select_goal_by_ratio(&field, max, ratio, rng) {
        Some(goal) => Route {
            start: ends.start,
            goal: goal.cell,
            distance: goal.distance,
        },
        None => Route {
            start: ends.start,
            goal: ends.end,
            distance: ends.distance,
        },
    }
}
