use crate::geometry::Position;
use crate::grid::{Cost, Grid, INFINITY, RunState, VisitFlag};
use super::frontier::Frontier;
use super::traversal::{Leg, run_legs};

use log::trace;


const NAME: &str = "BiDijkstra";

/// The two frontiers. The backward one keeps its distance-to-target in
/// `heuristic_distance` and points towards the target with `next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Forward,
    Backward,
}

impl Side {

    fn flag(self) -> VisitFlag {
        match self {
            Side::Forward => VisitFlag::Forward,
            Side::Backward => VisitFlag::Backward,
        }
    }

    fn other(self) -> Side {
        match self {
            Side::Forward => Side::Backward,
            Side::Backward => Side::Forward,
        }
    }

    fn distance(self, run: &RunState) -> Cost {
        match self {
            Side::Forward => run.distance,
            Side::Backward => run.heuristic_distance,
        }
    }

    /// Label `run` with a distance reached through `via`
    fn label(self, run: &mut RunState, leg: Leg, distance: Cost, via: Position) {
        match self {
            Side::Forward => {
                run.distance = distance;
                run.set_link(leg.link, Some(via));
            }
            Side::Backward => {
                run.heuristic_distance = distance;
                run.next = Some(via);
            }
        }
    }
}


/// Best connecting edge seen so far: `near` is labelled by the forward
/// side, `far` by the backward side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Meeting {
    length: Cost,
    near: Position,
    far: Position,
}

enum Step {
    Settled,
    Met,
    Exhausted,
}


/// Bidirectional Dijkstra
/// Grows one frontier from the source and one from the target, settling
/// one node on each side per round. The rounds stop when a side pops a
/// node the other side already settled; the path is then stitched across
/// the shortest edge joining the two labelled regions.
pub fn bidirectional_dijkstra(grid: &mut Grid) -> Vec<Position> {
    run_legs(grid, NAME, search_leg)
}

fn search_leg(grid: &mut Grid, leg: Leg, visited: &mut Vec<Position>) -> bool {
    let mut forward = Frontier::new();
    let mut backward = Frontier::new();
    let mut best: Option<Meeting> = None;

    grid[leg.source].run.distance = 0;
    forward.push(leg.source, 0, 0);
    grid[leg.target].run.heuristic_distance = 0;
    backward.push(leg.target, 0, 0);

    loop {
        for (side, frontier) in [(Side::Forward, &mut forward), (Side::Backward, &mut backward)] {
            match step(grid, frontier, side, leg, visited, &mut best) {
                Step::Settled => {}
                Step::Met => return stitch(grid, leg, best),
                Step::Exhausted => return false,
            }
        }
    }
}

/// Settle the closest node of one side
fn step(
    grid: &mut Grid,
    frontier: &mut Frontier,
    side: Side,
    leg: Leg,
    visited: &mut Vec<Position>,
    best: &mut Option<Meeting>,
) -> Step {
    let current = loop {
        let Some(entry) = frontier.pop() else {
            return Step::Exhausted;
        };
        let run = &grid[entry.position].run;
        if run.is_visited_by(side.flag()) || entry.priority > side.distance(run) {
            continue;
        }
        break entry.position;
    };

    if grid[current].run.is_visited_by(side.other().flag()) {
        trace!("[{NAME}] frontiers met at {current}");
        return Step::Met;
    }

    grid[current].run.mark_visited(side.flag());
    visited.push(current);
    let reached = side.distance(&grid[current].run);

    for neighbor in grid.neighbors(current) {
        let node = &mut grid[neighbor];
        if node.is_wall() || node.run.is_visited_by(side.flag()) {
            continue;
        }

        if reached + 1 < side.distance(&node.run) {
            side.label(&mut node.run, leg, reached + 1, current);
            frontier.push(neighbor, reached + 1, 0);
        }

        // every edge into the other side's labelled region is a candidate connector
        let across = side.other().distance(&node.run);
        if across != INFINITY {
            let length = reached + 1 + across;
            let (near, far) = match side {
                Side::Forward => (current, neighbor),
                Side::Backward => (neighbor, current),
            };
            if best.is_none_or(|meeting| length < meeting.length) {
                *best = Some(Meeting { length, near, far });
            }
        }
    }
    Step::Settled
}

/// Join the two halves: `far` and the backward chain behind it are
/// re-pointed so one back-pointer chain runs from the target to the source.
fn stitch(grid: &mut Grid, leg: Leg, best: Option<Meeting>) -> bool {
    let Some(Meeting { length, near, far }) = best else {
        return false;
    };
    trace!("[{NAME}] connecting {near} -> {far}, path length {length}");

    grid[far].run.set_link(leg.link, Some(near));
    let mut current = far;
    while let Some(next) = grid[current].run.next {
        grid[next].run.set_link(leg.link, Some(current));
        current = next;
    }
    current == leg.target
}
