use rand::Rng;

use crate::geometry::{Direction, Position};
use crate::grid::Grid;


/// Randomized depth-first carving
/// Cells sharing the start node's row and column parity form a lattice.
/// Starting at the start node, the carver steps two cells at a time to a
/// random uncarved lattice cell, opening the cell in between, and
/// backtracks when stuck. The lattice ends up as a spanning tree (a
/// perfect maze). Finish and detour nodes off the lattice get a short
/// spur to the nearest lattice cell, which may add a loop.
///
/// - [Maze generation](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Randomized_depth-first_search)
pub fn recursive_backtrack_maze<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<Position> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let index = |pos: Position| pos.row * cols + pos.col;
    let mut open = vec![false; rows * cols];

    let start = grid.start();
    open[index(start)] = true;
    let mut stack = vec![start];
    let mut options: Vec<Position> = Vec::with_capacity(4);

    while let Some(&current) = stack.last() {
        options.clear();
        options.extend(
            Direction::ORDER
                .iter()
                .filter_map(|&dir| current.offset(dir, 2, rows, cols))
                .filter(|&cell| !open[index(cell)]),
        );
        if options.is_empty() {
            stack.pop();
            continue;
        }

        let next = options[rng.random_range(0..options.len())];
        let between = Position::new((current.row + next.row) / 2, (current.col + next.col) / 2);
        open[index(between)] = true;
        open[index(next)] = true;
        stack.push(next);
    }

    for pos in [Some(grid.finish()), grid.detour()].into_iter().flatten() {
        if open[index(pos)] {
            continue;
        }
        let anchor = Position::new(snap(pos.row, start.row), snap(pos.col, start.col));
        open[index(Position::new(anchor.row, pos.col))] = true;
        open[index(pos)] = true;
    }

    grid.all_nodes()
        .map(|node| node.position())
        .filter(|&pos| !open[index(pos)] && !grid.is_reserved(pos))
        .collect()
}

/// Nearest coordinate with the same parity as `origin`
fn snap(coord: usize, origin: usize) -> usize {
    if coord % 2 == origin % 2 {
        coord
    } else if coord > 0 {
        coord - 1
    } else {
        // origin is odd here, so the dimension is at least 2
        coord + 1
    }
}
