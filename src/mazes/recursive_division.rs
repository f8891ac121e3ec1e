use rand::Rng;

use crate::geometry::Position;
use crate::grid::Grid;
use super::{border, without_reserved};


/// Rectangle of open cells, bounds inclusive
#[derive(Clone, Copy, Debug)]
struct Chamber {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

impl Chamber {
    fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    fn width(&self) -> usize {
        self.right - self.left + 1
    }
}

/// Recursive division
/// Walls the border, then splits the interior with a straight wall on an
/// even row or column, leaves one passage cell at an odd index, and
/// repeats on both halves until a chamber is narrower than 3 cells.
/// Chambers are cut across their longer side. Every open cell stays
/// reachable from every other.
///
/// - [Recursive division](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Recursive_division_method)
pub fn recursive_division_maze<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<Position> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut walls = border(rows, cols);

    let mut chambers = Vec::new();
    if rows >= 3 && cols >= 3 {
        chambers.push(Chamber { top: 1, left: 1, bottom: rows - 2, right: cols - 2 });
    }

    while let Some(chamber) = chambers.pop() {
        let (height, width) = (chamber.height(), chamber.width());
        if height < 3 || width < 3 {
            continue;
        }

        let horizontal = match width.cmp(&height) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => rng.random_bool(0.5),
        };

        if horizontal {
            let Some(row) = pick(rng, chamber.top + 1..chamber.bottom, 0) else {
                continue;
            };
            let Some(gap) = pick(rng, chamber.left..chamber.right + 1, 1) else {
                continue;
            };
            walls.extend((chamber.left..=chamber.right).filter(|&col| col != gap).map(|col| Position::new(row, col)));
            chambers.push(Chamber { bottom: row - 1, ..chamber });
            chambers.push(Chamber { top: row + 1, ..chamber });
        } else {
            let Some(col) = pick(rng, chamber.left + 1..chamber.right, 0) else {
                continue;
            };
            let Some(gap) = pick(rng, chamber.top..chamber.bottom + 1, 1) else {
                continue;
            };
            walls.extend((chamber.top..=chamber.bottom).filter(|&row| row != gap).map(|row| Position::new(row, col)));
            chambers.push(Chamber { right: col - 1, ..chamber });
            chambers.push(Chamber { left: col + 1, ..chamber });
        }
    }
    without_reserved(grid, walls)
}

/// Random index in `range` with the given parity
fn pick<R: Rng + ?Sized>(rng: &mut R, range: std::ops::Range<usize>, parity: usize) -> Option<usize> {
    let candidates: Vec<usize> = range.filter(|i| i % 2 == parity).collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
