use crate::geometry::Position;
use crate::grid::{Cost, Grid};
use super::traversal::{Scoring, best_first, run_legs};


/// Distance so far plus Manhattan distance to the target. Equal
/// priorities favour the node closer to the target.
pub(crate) struct AStar;

impl Scoring for AStar {
    const NAME: &'static str = "AStar";

    fn priority(distance: Cost, to_target: Cost) -> Cost {
        distance + to_target
    }

    fn tie_break(to_target: Cost) -> Cost {
        to_target
    }
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// The Manhattan heuristic is admissible and consistent for orthogonal
/// unit moves, so the path it leaves behind is a shortest one.
pub fn a_star(grid: &mut Grid) -> Vec<Position> {
    run_legs(grid, AStar::NAME, best_first::<AStar>)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::{dijkstra, shortest_path_order};
    use crate::graph_algos::test_support::{assert_valid_path, bfs_distance, is_simple};

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_a_star_open_grid() {
        let mut grid = Grid::new(5, 5, p(0, 0), p(4, 4)).unwrap();
        let visited = a_star(&mut grid);
        let path = shortest_path_order(&grid);

        assert_eq!(path.len(), 9);
        assert!(visited.len() <= 25);
        assert_valid_path(&grid, &path);
    }

    #[test]
    fn test_a_star_heads_straight_for_target() {
        // nothing in the way: every settled node lies on a shortest path
        let mut grid = Grid::new(9, 9, p(4, 0), p(4, 8)).unwrap();
        let visited = a_star(&mut grid);

        assert_eq!(visited.len(), 9);
        assert!(visited.iter().all(|pos| pos.row == 4));
    }

    #[test]
    fn test_a_star_visits_no_more_than_dijkstra() {
        let layout = "
            S.........
            .######...
            ......#...
            .####.#.#.
            ......#.#F
        ";
        let mut by_a_star = Grid::from_ascii(layout);
        let mut by_dijkstra = Grid::from_ascii(layout);

        let a_star_visits = a_star(&mut by_a_star).len();
        let dijkstra_visits = dijkstra(&mut by_dijkstra).len();
        assert!(a_star_visits <= dijkstra_visits);

        let path = shortest_path_order(&by_a_star);
        assert_eq!(path.len(), shortest_path_order(&by_dijkstra).len());
        assert_eq!(path.len() - 1, bfs_distance(&by_a_star, by_a_star.start(), by_a_star.finish()).unwrap());
        assert!(is_simple(&path));
    }

    #[test]
    fn test_a_star_adjacent_nodes() {
        let mut grid = Grid::new(3, 3, p(1, 1), p(2, 1)).unwrap();
        a_star(&mut grid);
        assert_eq!(shortest_path_order(&grid), vec![p(1, 1), p(2, 1)]);
    }

    #[test]
    fn test_a_star_with_detour_behind_start() {
        let mut grid = Grid::from_ascii("
            ..D..
            .....
            S...F
        ");
        a_star(&mut grid);
        let path = shortest_path_order(&grid);

        // (2,0) -> (0,2) is 4 moves, (0,2) -> (2,4) is 4 moves
        assert_eq!(path.len(), 9);
        assert_eq!(path[4], p(0, 2));
        assert_valid_path(&grid, &path);
    }
}
