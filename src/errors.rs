use crate::geometry::Position;
use thiserror::Error;


/// Errors raised while building or editing a grid
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    ZeroDimensions,
    #[error("position {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
    #[error("position {0} is already taken by another reserved node")]
    ReservedOverlap(Position), // start, finish and detour must be distinct
    #[error("position {0} cannot hold both a wall and a reserved node")]
    WallOnReserved(Position),
}


/// Errors raised when the presentation layer names an unknown algorithm or maze
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown search algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("unknown maze generator `{0}`")]
    UnknownMaze(String),
}
