//! Helpers shared by every search: the detour leg structure and the
//! best-first loop behind Dijkstra, A* and Greedy.

use crate::geometry::Position;
use crate::grid::{Cost, Grid, INFINITY, Link, VisitFlag};
use super::frontier::Frontier;

use log::{debug, trace};


/// One sub-search of a run: from `source` until `target` is settled,
/// recording back-pointers in `link`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Leg {
    pub source: Position,
    pub target: Position,
    pub link: Link,
}

/// start -> finish, or start -> detour -> finish when a detour is placed
pub(crate) fn legs(grid: &Grid) -> Vec<Leg> {
    match grid.detour() {
        Some(detour) => vec![
            Leg { source: grid.start(), target: detour, link: Link::Detour },
            Leg { source: detour, target: grid.finish(), link: Link::Primary },
        ],
        None => vec![Leg { source: grid.start(), target: grid.finish(), link: Link::Primary }],
    }
}

/// Runs `search` once per leg and concatenates the settled nodes.
/// A leg that cannot reach its target ends the run.
pub(crate) fn run_legs<F>(grid: &mut Grid, name: &str, mut search: F) -> Vec<Position>
where
    F: FnMut(&mut Grid, Leg, &mut Vec<Position>) -> bool,
    {
    let mut visited = Vec::new();

    for (i, leg) in legs(grid).into_iter().enumerate() {
        if i > 0 {
            grid.reset_leg_state();
        }
        trace!("[{name}] leg {}: {} -> {}", i + 1, leg.source, leg.target);

        if !search(grid, leg, &mut visited) {
            debug!("[{name}] {} unreachable, {} nodes visited", leg.target, visited.len());
            return visited;
        }
    }

    debug!("[{name}] reached {}, {} nodes visited", grid.finish(), visited.len());
    visited
}


/// Priority rule of a best-first search
pub(crate) trait Scoring {
    const NAME: &'static str;

    /// Whether a shorter distance re-labels an already discovered node
    const RELAX: bool = true;

    /// Priority stored in `heuristic_distance`, lowest settles first
    fn priority(distance: Cost, to_target: Cost) -> Cost;

    /// Orders equal priorities, lowest first. Insertion order breaks
    /// the remaining ties.
    fn tie_break(_to_target: Cost) -> Cost {
        0
    }
}

/// Settles nodes in priority order until `leg.target` is settled (true)
/// or the frontier runs dry (false). Walls are never entered.
pub(crate) fn best_first<S: Scoring>(grid: &mut Grid, leg: Leg, visited: &mut Vec<Position>) -> bool {
    let to_target = |pos: Position| pos.manhattan(&leg.target) as Cost;
    let mut frontier = Frontier::new();
    let mut nbuf: Vec<Position> = Vec::with_capacity(4);

    let h = to_target(leg.source);
    let source = &mut grid[leg.source].run;
    source.distance = 0;
    source.heuristic_distance = S::priority(0, h);
    frontier.push(leg.source, source.heuristic_distance, S::tie_break(h));

    while let Some(entry) = frontier.pop() {
        let current = entry.position;
        let run = &mut grid[current].run;

        // settled already, or re-labelled with a better priority since
        if run.is_visited || entry.priority > run.heuristic_distance {
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
            if node.run.distance != INFINITY && (!S::RELAX || distance >= node.run.distance) {
                continue;
            }

            let h = to_target(neighbor);
            node.run.distance = distance;
            node.run.heuristic_distance = S::priority(distance, h);
            node.run.set_link(leg.link, Some(current));
            frontier.push(neighbor, node.run.heuristic_distance, S::tie_break(h));
        }
    }
    false
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legs_without_detour() {
        let grid = Grid::from_ascii("
            S..
            ..F
        ");
        assert_eq!(legs(&grid), vec![Leg {
            source: Position::new(0, 0),
            target: Position::new(1, 2),
            link: Link::Primary,
        }]);
    }

    #[test]
    fn test_legs_with_detour() {
        let grid = Grid::from_ascii("
            S.D
            ..F
        ");
        let legs = legs(&grid);
        assert_eq!(legs.len(), 2);
        assert_eq!((legs[0].target, legs[0].link), (Position::new(0, 2), Link::Detour));
        assert_eq!((legs[1].source, legs[1].link), (Position::new(0, 2), Link::Primary));
    }

    #[test]
    fn test_run_legs_stops_after_failed_leg() {
        let mut grid = Grid::from_ascii("
            S.D
            ..F
        ");
        let mut calls = 0;
        let visited = run_legs(&mut grid, "Test", |_, leg, visited| {
            calls += 1;
            visited.push(leg.source);
            false
        });
        assert_eq!(calls, 1);
        assert_eq!(visited, vec![Position::new(0, 0)]);
    }
}
