use crate::geometry::Position;
use crate::grid::{Cost, Grid};
use super::traversal::{Scoring, best_first, run_legs};


/// Manhattan distance to the target only. A node keeps the parent that
/// discovered it.
pub(crate) struct Greedy;

impl Scoring for Greedy {
    const NAME: &'static str = "Greedy";
    const RELAX: bool = false;

    fn priority(_distance: Cost, to_target: Cost) -> Cost {
        to_target
    }
}


/// Greedy best-first search
/// https://en.wikipedia.org/wiki/Best-first_search
/// Always expands the node that looks closest to the target. Fast on
/// open grids, but the path it finds is not guaranteed to be shortest.
pub fn greedy_best_first(grid: &mut Grid) -> Vec<Position> {
    run_legs(grid, Greedy::NAME, best_first::<Greedy>)
}
