use crate::geometry::Position;
use crate::grid::{Grid, Link};

use log::warn;

/// Construct the shortest path by walking back-pointers from the finish node
/// Returns the ordered path as a vector of positions from start to finish
/// - follows `previous` until the detour node, then `previous_detour`
/// - a finish node without any predecessor means no path: the result is empty
pub fn shortest_path_order(grid: &Grid) -> Vec<Position> {

    let detour = grid.detour();
    let mut link = Link::Primary;
    let mut path = Vec::new();
    let mut current = Some(grid.finish());

    // Trace back from finish to start
    while let Some(pos) = current {
        if path.len() >= 2 * grid.size() {
            // a detour path may cross a cell twice, never more
            warn!("[ShortestPath] back-pointer cycle through {pos}, dropping path");
            return Vec::new();
        }
        if Some(pos) == detour {
            link = Link::Detour;
        }
        path.push(pos);
        current = grid[pos].run.link(link);
    }

    // Only the finish node: no path was found
    if path.len() == 1 {
        return Vec::new();
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
