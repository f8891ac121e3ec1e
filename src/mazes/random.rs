use rand::Rng;

use crate::geometry::Position;
use crate::grid::Grid;


/// Scatter walls: every non-reserved cell independently becomes a wall
/// with probability 1/3. Walls come out in row-major order. No border and
/// no connectivity guarantee, so the finish may be cut off.
pub fn random_maze<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<Position> {
    grid.all_nodes()
        .map(|node| node.position())
        .filter(|&pos| !grid.is_reserved(pos))
        .filter(|_| rng.random_ratio(1, 3))
        .collect()
}
