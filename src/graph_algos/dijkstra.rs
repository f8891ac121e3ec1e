use crate::geometry::Position;
use crate::grid::{Cost, Grid};
use super::traversal::{Scoring, best_first, run_legs};


/// Uniform cost: priority is the distance from the leg's source
pub(crate) struct Dijkstra;

impl Scoring for Dijkstra {
    const NAME: &'static str = "Dijkstra";

    fn priority(distance: Cost, _to_target: Cost) -> Cost {
        distance
    }
}


/// Dijkstra's Algorithm on the unit-cost grid
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Settles nodes in increasing distance from the start (then from the
/// detour for the second leg) and stops as soon as the target is settled.
/// Returns the settled nodes in order; back-pointers are left on the grid.
pub fn dijkstra(grid: &mut Grid) -> Vec<Position> {
    run_legs(grid, Dijkstra::NAME, best_first::<Dijkstra>)
}
