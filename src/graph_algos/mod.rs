pub mod dijkstra;
pub mod a_star;
pub mod greedy;
pub mod bidirectional;
pub mod recursive;
mod frontier;
mod shortest_path;
mod traversal;

pub use a_star::a_star;
pub use bidirectional::bidirectional_dijkstra;
pub use dijkstra::dijkstra;
pub use greedy::greedy_best_first;
pub use recursive::recursive_search;
pub use shortest_path::shortest_path_order;

use std::{fmt, str::FromStr};

use crate::errors::SelectionError;
use crate::geometry::Position;
use crate::grid::Grid;


/// Search algorithms the engine can run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    BidirectionalDijkstra,
    AStar,
    Greedy,
    Recursive,
}

impl Algorithm {

    pub const ALL: [Algorithm; 5] = [
        Algorithm::Dijkstra,
        Algorithm::BidirectionalDijkstra,
        Algorithm::AStar,
        Algorithm::Greedy,
        Algorithm::Recursive,
    ];

    /// Identifier used by the presentation layer
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BidirectionalDijkstra => "bidirectional-dijkstra",
            Algorithm::AStar => "a-star",
            Algorithm::Greedy => "greedy",
            Algorithm::Recursive => "recursive",
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
            Algorithm::BidirectionalDijkstra => "Bidirectional Dijkstra",
            Algorithm::AStar => "A* Search",
            Algorithm::Greedy => "Greedy Best-First Search",
            Algorithm::Recursive => "Recursive Search",
        }
    }

    /// Whether the reconstructed path is always a shortest one
    pub fn guarantees_shortest_path(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::BidirectionalDijkstra | Algorithm::AStar)
    }

    /// Run on the grid as it is, returning settled nodes in order.
    /// Run-scoped fields must be clear beforehand, see `crate::run_search`.
    pub fn run(self, grid: &mut Grid) -> Vec<Position> {
        match self {
            Algorithm::Dijkstra => dijkstra(grid),
            Algorithm::BidirectionalDijkstra => bidirectional_dijkstra(grid),
            Algorithm::AStar => a_star(grid),
            Algorithm::Greedy => greedy_best_first(grid),
            Algorithm::Recursive => recursive_search(grid),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bidirectional-dijkstra" | "bi-dijkstra" | "bidijkstra" => Ok(Algorithm::BidirectionalDijkstra),
            "a-star" | "astar" | "a*" => Ok(Algorithm::AStar),
            "greedy" | "greedy-best-first" => Ok(Algorithm::Greedy),
            "recursive" | "dfs" => Ok(Algorithm::Recursive),
            _ => Err(SelectionError::UnknownAlgorithm(s.to_string())),
        }
    }
}
