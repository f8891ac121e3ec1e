//! Wall layouts for the grid.
//!
//! Every generator reads the grid's dimensions and reserved nodes and
//! returns the positions to mark as maze walls, in the order a
//! presentation layer should draw them. Reserved nodes are never walls.

pub mod random;
pub mod recursive_backtrack;
pub mod recursive_division;
pub mod snake;

pub use random::random_maze;
pub use recursive_backtrack::recursive_backtrack_maze;
pub use recursive_division::recursive_division_maze;
pub use snake::snake_maze;

use std::{fmt, str::FromStr};

use log::debug;
use rand::Rng;

use crate::collections::FxIndexSet;
use crate::errors::SelectionError;
use crate::geometry::Position;
use crate::grid::Grid;


/// Maze generators the engine offers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Maze {
    Snake,
    Random,
    RecursiveBacktrack,
    RecursiveDivision,
}

impl Maze {

    pub const ALL: [Maze; 4] = [Maze::Snake, Maze::Random, Maze::RecursiveBacktrack, Maze::RecursiveDivision];

    /// Identifier used by the presentation layer
    pub fn id(self) -> &'static str {
        match self {
            Maze::Snake => "snake",
            Maze::Random => "random",
            Maze::RecursiveBacktrack => "recursive-backtrack",
            Maze::RecursiveDivision => "recursive-division",
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Maze::Snake => "Snake Maze",
            Maze::Random => "Random Maze",
            Maze::RecursiveBacktrack => "Recursive Backtrack Maze",
            Maze::RecursiveDivision => "Recursive Division Maze",
        }
    }

    /// Wall positions for `grid`, drawing randomness from `rng`
    pub fn generate<R: Rng + ?Sized>(self, grid: &Grid, rng: &mut R) -> Vec<Position> {
        let walls = match self {
            Maze::Snake => snake_maze(grid),
            Maze::Random => random_maze(grid, rng),
            Maze::RecursiveBacktrack => recursive_backtrack_maze(grid, rng),
            Maze::RecursiveDivision => recursive_division_maze(grid, rng),
        };
        debug!("[Maze] {} on {}x{}: {} walls", self.id(), grid.rows(), grid.cols(), walls.len());
        walls
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Maze {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snake" => Ok(Maze::Snake),
            "random" => Ok(Maze::Random),
            "recursive-backtrack" | "backtrack" => Ok(Maze::RecursiveBacktrack),
            "recursive-division" | "division" => Ok(Maze::RecursiveDivision),
            _ => Err(SelectionError::UnknownMaze(s.to_string())),
        }
    }
}


/// Outline of the grid: top left to right, right side down, bottom right
/// to left, left side up. Corners appear once.
pub(crate) fn border(rows: usize, cols: usize) -> FxIndexSet<Position> {
    let (last_row, last_col) = (rows - 1, cols - 1);
    let top = (0..cols).map(|col| Position::new(0, col));
    let right = (0..rows).map(|row| Position::new(row, last_col));
    let bottom = (0..cols).rev().map(|col| Position::new(last_row, col));
    let left = (0..rows).rev().map(|row| Position::new(row, 0));
    top.chain(right).chain(bottom).chain(left).collect()
}

/// Drop reserved nodes, keep drawing order
pub(crate) fn without_reserved(grid: &Grid, walls: FxIndexSet<Position>) -> Vec<Position> {
    walls.into_iter().filter(|&pos| !grid.is_reserved(pos)).collect()
}
