use crate::geometry::Position;
use crate::grid::{Grid, VisitFlag};
use super::traversal::{Leg, run_legs};


const NAME: &str = "Recursive";

/// Depth-first search with an explicit stack
/// Neighbors are pushed right, up, left, down, so the search dives down
/// first. Each node remembers the last settled node that pushed it. The
/// path follows discovery order and is usually not the shortest.
pub fn recursive_search(grid: &mut Grid) -> Vec<Position> {
    run_legs(grid, NAME, depth_first)
}

fn depth_first(grid: &mut Grid, leg: Leg, visited: &mut Vec<Position>) -> bool {
    let mut stack = vec![leg.source];
    let mut nbuf: Vec<Position> = Vec::with_capacity(4);
    grid[leg.source].run.distance = 0;

    while let Some(current) = stack.pop() {
        let run = &mut grid[current].run;
        // pushed more than once before it was reached
        if run.is_visited {
            continue;
        }
        run.is_visited = true;
        visited.push(current);

        if current == leg.target {
            return true;
        }

        let distance = run.distance + 1;
        nbuf.clear();
        nbuf.extend(grid.unvisited_neighbors(current, VisitFlag::Forward));

        for &neighbor in nbuf.iter() {
            let node = &mut grid[neighbor];
            if node.is_wall() {
                continue;
            }
            node.run.distance = distance;
            node.run.set_link(leg.link, Some(current));
            stack.push(neighbor);
        }
    }
    false
}
