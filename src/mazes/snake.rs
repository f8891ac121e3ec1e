use crate::geometry::Position;
use crate::grid::Grid;
use super::{border, without_reserved};


/// Open cells left at the end of each wall row
const GAP_WIDTH: usize = 4;

/// Deterministic serpentine corridor
/// The border is walled and every 4th row becomes a wall, except for a
/// gap of `GAP_WIDTH` cells that switches sides every 8 rows: rows
/// divisible by 8 open on the left, the others on the right.
pub fn snake_maze(grid: &Grid) -> Vec<Position> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut walls = border(rows, cols);

    for row in (1..rows.saturating_sub(1)).filter(|row| row % 4 == 0) {
        for col in 1..cols - 1 {
            let left_gap = row % 8 == 0 && col <= GAP_WIDTH;
            let right_gap = row % 8 == 4 && col + GAP_WIDTH >= cols - 1;
            if !left_gap && !right_gap {
                walls.insert(Position::new(row, col));
            }
        }
    }
    without_reserved(grid, walls)
}
