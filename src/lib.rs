//! Search engine behind a grid pathfinding visualizer.
//!
//! A [`Grid`] owns its nodes and the start, finish and optional detour
//! positions. [`run_search`] runs one of the [`Algorithm`]s and returns the
//! nodes in the order they were settled, [`shortest_path_order`] reads the
//! back-pointers the run left behind, and [`generate_maze`] produces wall
//! layouts. Timing and rendering stay with the caller.
//!
//! ```
//! use gridsearch::{Algorithm, Grid, Position, run_search, shortest_path_order};
//!
//! let mut grid = Grid::new(5, 5, Position::new(0, 0), Position::new(4, 4)).unwrap();
//! let visited = run_search(Algorithm::AStar, &mut grid);
//! let path = shortest_path_order(&grid);
//!
//! assert_eq!(path.len(), 9);
//! assert!(visited.len() <= 25);
//! ```

pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod mazes;

pub use collections::{FxHashSet, FxIndexSet};
pub use config::GridConfig;
pub use errors::{GridError, SelectionError};
pub use geometry::{Direction, Position, manhattan_distance};
pub use graph_algos::{Algorithm, shortest_path_order};
pub use grid::{Grid, Node, NodeKind, NodeSummary};
pub use mazes::Maze;

use rand::Rng;


/// Clear the previous run and search `grid` with `algorithm`.
/// Returns the settled nodes in order; a detour shows up once per leg.
pub fn run_search(algorithm: Algorithm, grid: &mut Grid) -> Vec<Position> {
    grid.clear_run_state();
    algorithm.run(grid)
}

/// Wall positions for `grid` using the thread-local generator
pub fn generate_maze(maze: Maze, grid: &Grid) -> Vec<Position> {
    maze.generate(grid, &mut rand::rng())
}

/// Wall positions for `grid`, drawing randomness from `rng`
pub fn generate_maze_with<R: Rng + ?Sized>(maze: Maze, grid: &Grid, rng: &mut R) -> Vec<Position> {
    maze.generate(grid, rng)
}
