mod node;

pub use node::{Cost, INFINITY, Link, Node, NodeKind, NodeSummary, RunState, VisitFlag};

use std::ops::{Index, IndexMut};
use log::debug;

use crate::collections::FxHashSet;
use crate::config::GridConfig;
use crate::errors::GridError;
use crate::geometry::{Direction, Position};


/// Fixed size `rows x cols` grid of nodes, stored row-major.
/// Owns the start, finish and optional detour positions of the session,
/// so independent grids never share search state.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>, // nodes[row * cols + col] has matching row/col
    start: Position,
    finish: Position,
    detour: Option<Position>,
}

impl Grid {

    /// Empty grid with start and finish placed
    pub fn new(rows: usize, cols: usize, start: Position, finish: Position) -> Result<Self, GridError> {
        Self::from_config(&GridConfig::new(rows, cols, start, finish))
    }

    /// Build a grid from a validated configuration
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        if config.rows == 0 || config.cols == 0 {
            return Err(GridError::ZeroDimensions);
        }

        let cols = config.cols;
        let nodes = (0..config.rows)
            .flat_map(|row| (0..cols).map(move |col| Node::new(row, col)))
            .collect();

        let mut grid = Self {
            rows: config.rows,
            cols,
            nodes,
            start: config.start,
            finish: config.finish,
            detour: None,
        };

        grid.check_bounds(config.start)?;
        grid.check_bounds(config.finish)?;
        if config.start == config.finish {
            return Err(GridError::ReservedOverlap(config.finish));
        }
        grid[config.start].kind = NodeKind::Start;
        grid[config.finish].kind = NodeKind::Finish;

        if let Some(detour) = config.detour {
            grid.set_detour(Some(detour))?;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn finish(&self) -> Position {
        self.finish
    }

    pub fn detour(&self) -> Option<Position> {
        self.detour
    }

    pub fn has_detour(&self) -> bool {
        self.detour.is_some()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn node(&self, pos: Position) -> Option<&Node> {
        if self.contains(pos) { Some(&self[pos]) } else { None }
    }

    fn check_bounds(&self, pos: Position) -> Result<(), GridError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { position: pos, rows: self.rows, cols: self.cols })
        }
    }

    /// Every node, row-major
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Rows as slices, top to bottom
    pub fn node_rows(&self) -> impl Iterator<Item = &[Node]> {
        self.nodes.chunks(self.cols)
    }

    /// In-bounds orthogonal neighbors in right, up, left, down order
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        Direction::ORDER.into_iter().filter_map(move |d| pos.step(d, rows, cols))
    }

    /// Neighbors not yet settled under `flag`. Walls are not filtered here.
    pub fn unvisited_neighbors(&self, pos: Position, flag: VisitFlag) -> impl Iterator<Item = Position> + '_ {
        self.neighbors(pos).filter(move |&n| !self[n].run.is_visited_by(flag))
    }

    pub fn is_reserved(&self, pos: Position) -> bool {
        pos == self.start || pos == self.finish || Some(pos) == self.detour
    }

    /// Start, finish and detour (when placed)
    pub fn reserved(&self) -> FxHashSet<Position> {
        let mut reserved = FxHashSet::default();
        reserved.insert(self.start);
        reserved.insert(self.finish);
        reserved.extend(self.detour);
        reserved
    }

    /// Checks a reserved marker of `kind` may be moved onto `pos`
    fn check_marker(&self, pos: Position, kind: NodeKind) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        let current = self[pos].kind;
        if current.is_wall() {
            return Err(GridError::WallOnReserved(pos));
        }
        if current.is_reserved() && current != kind {
            return Err(GridError::ReservedOverlap(pos));
        }
        Ok(())
    }

    pub fn set_start(&mut self, pos: Position) -> Result<(), GridError> {
        self.check_marker(pos, NodeKind::Start)?;
        let old = self.start;
        self[old].kind = NodeKind::Empty;
        self[pos].kind = NodeKind::Start;
        self.start = pos;
        Ok(())
    }

    pub fn set_finish(&mut self, pos: Position) -> Result<(), GridError> {
        self.check_marker(pos, NodeKind::Finish)?;
        let old = self.finish;
        self[old].kind = NodeKind::Empty;
        self[pos].kind = NodeKind::Finish;
        self.finish = pos;
        Ok(())
    }

    /// Place, move or (with `None`) remove the detour
    pub fn set_detour(&mut self, pos: Option<Position>) -> Result<(), GridError> {
        if let Some(pos) = pos {
            self.check_marker(pos, NodeKind::Detour)?;
        }
        if let Some(old) = self.detour.take() {
            self[old].kind = NodeKind::Empty;
        }
        if let Some(pos) = pos {
            self[pos].kind = NodeKind::Detour;
            self.detour = Some(pos);
        }
        Ok(())
    }

    /// Add or remove a user wall
    pub fn set_wall(&mut self, pos: Position, wall: bool) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        if self.is_reserved(pos) {
            return Err(GridError::WallOnReserved(pos));
        }
        self[pos].kind = if wall { NodeKind::Wall } else { NodeKind::Empty };
        Ok(())
    }

    /// Flip a cell between wall and empty, returns whether it is now a wall
    pub fn toggle_wall(&mut self, pos: Position) -> Result<bool, GridError> {
        self.check_bounds(pos)?;
        let wall = !self[pos].is_wall();
        self.set_wall(pos, wall)?;
        Ok(wall)
    }

    /// Mark maze generator output as `WallMaze`. Reserved and out of
    /// bounds positions are skipped. Returns the number of walls placed.
    pub fn apply_maze(&mut self, walls: &[Position]) -> usize {
        let mut placed = 0;
        for &pos in walls {
            if !self.contains(pos) || self.is_reserved(pos) {
                debug!("[Grid] skipping maze wall at {pos}");
                continue;
            }
            self[pos].kind = NodeKind::WallMaze;
            placed += 1;
        }
        placed
    }

    /// Remove user and maze walls from every node not in `reserved`
    pub fn clear_walls(&mut self, reserved: &FxHashSet<Position>) {
        for node in self.nodes.iter_mut() {
            if node.is_wall() && !reserved.contains(&node.position()) {
                node.kind = NodeKind::Empty;
            }
        }
    }

    /// Clear every run-scoped field (distances, visited flags and
    /// back-pointers) of the nodes not in `reserved`. Kinds are kept.
    pub fn reset_run_state(&mut self, reserved: &FxHashSet<Position>) {
        for node in self.nodes.iter_mut() {
            if !reserved.contains(&node.position()) {
                node.run = RunState::default();
            }
        }
    }

    /// Clear the run-scoped fields of every node
    pub fn clear_run_state(&mut self) {
        self.reset_run_state(&FxHashSet::default());
    }

    /// Between the legs of a detour run: forget distances and visited
    /// flags everywhere, keep the back-pointers of the finished leg.
    pub(crate) fn reset_leg_state(&mut self) {
        for node in self.nodes.iter_mut() {
            node.run.reset_search();
        }
    }

    /// `{row, col, kind}` records for a sequence of positions
    pub fn summarize(&self, positions: &[Position]) -> Vec<NodeSummary> {
        positions.iter().map(|&pos| NodeSummary::from(&self[pos])).collect()
    }

    /// Test fixture parser: `S` start, `F` finish, `D` detour, `#` wall,
    /// `.` empty. Rows are separated by newlines.
    #[cfg(test)]
    pub(crate) fn from_ascii(layout: &str) -> Self {
        let lines: Vec<&str> = layout.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let rows = lines.len();
        let cols = lines[0].len();
        assert!(lines.iter().all(|l| l.len() == cols), "ragged grid layout");

        let find = |marker: char| {
            lines.iter().enumerate().find_map(|(row, line)| {
                line.chars().position(|c| c == marker).map(|col| Position::new(row, col))
            })
        };
        let start = find('S').expect("layout has no start");
        let finish = find('F').expect("layout has no finish");

        let mut grid = Grid::new(rows, cols, start, finish).unwrap();
        grid.set_detour(find('D')).unwrap();
        for (row, line) in lines.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                if c == '#' {
                    grid.set_wall(Position::new(row, col), true).unwrap();
                }
            }
        }
        grid
    }
}

impl Index<Position> for Grid {
    type Output = Node;

    fn index(&self, pos: Position) -> &Node {
        assert!(self.contains(pos), "position {pos} outside {}x{} grid", self.rows, self.cols);
        &self.nodes[pos.row * self.cols + pos.col]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Node {
        assert!(self.contains(pos), "position {pos} outside {}x{} grid", self.rows, self.cols);
        &mut self.nodes[pos.row * self.cols + pos.col]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_nodes_match_their_position() {
        let grid = Grid::new(4, 6, p(0, 0), p(3, 5)).unwrap();
        assert_eq!(grid.size(), 24);
        for (i, node) in grid.all_nodes().enumerate() {
            assert_eq!(node.position(), p(i / 6, i % 6));
            assert_eq!(node.run.distance, INFINITY);
        }
        assert_eq!(grid.node_rows().count(), 4);
        assert_eq!(grid[p(3, 5)].kind, NodeKind::Finish);
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        assert_eq!(Grid::new(0, 5, p(0, 0), p(0, 1)).unwrap_err(), GridError::ZeroDimensions);
        assert_eq!(Grid::new(3, 3, p(1, 1), p(1, 1)).unwrap_err(), GridError::ReservedOverlap(p(1, 1)));
        assert!(matches!(
            Grid::new(3, 3, p(0, 0), p(3, 0)),
            Err(GridError::OutOfBounds { rows: 3, cols: 3, .. })
        ));

        let config = GridConfig::new(3, 3, p(0, 0), p(2, 2)).with_detour(p(0, 0));
        assert_eq!(Grid::from_config(&config).unwrap_err(), GridError::ReservedOverlap(p(0, 0)));
    }

    #[test]
    fn test_neighbor_order_and_edges() {
        let grid = Grid::new(3, 3, p(0, 0), p(2, 2)).unwrap();
        let center: Vec<_> = grid.neighbors(p(1, 1)).collect();
        assert_eq!(center, vec![p(1, 2), p(0, 1), p(1, 0), p(2, 1)]);

        let corner: Vec<_> = grid.neighbors(p(0, 0)).collect();
        assert_eq!(corner, vec![p(0, 1), p(1, 0)]);
    }

    #[test]
    fn test_unvisited_neighbors_respects_flag() {
        let mut grid = Grid::new(3, 3, p(0, 0), p(2, 2)).unwrap();
        grid[p(1, 2)].run.is_visited = true;
        grid[p(0, 1)].run.is_visited_by_finish = true;

        let forward: Vec<_> = grid.unvisited_neighbors(p(1, 1), VisitFlag::Forward).collect();
        assert_eq!(forward, vec![p(0, 1), p(1, 0), p(2, 1)]);
        let backward: Vec<_> = grid.unvisited_neighbors(p(1, 1), VisitFlag::Backward).collect();
        assert_eq!(backward, vec![p(1, 2), p(1, 0), p(2, 1)]);
    }

    #[test]
    fn test_markers_and_walls() {
        let mut grid = Grid::new(3, 3, p(0, 0), p(2, 2)).unwrap();
        assert_eq!(grid.toggle_wall(p(1, 1)), Ok(true));
        assert_eq!(grid.set_start(p(1, 1)), Err(GridError::WallOnReserved(p(1, 1))));
        assert_eq!(grid.set_wall(p(2, 2), true), Err(GridError::WallOnReserved(p(2, 2))));
        assert_eq!(grid.set_finish(p(0, 0)), Err(GridError::ReservedOverlap(p(0, 0))));

        grid.set_start(p(0, 1)).unwrap();
        assert_eq!(grid[p(0, 0)].kind, NodeKind::Empty);
        assert_eq!(grid[p(0, 1)].kind, NodeKind::Start);

        grid.set_detour(Some(p(2, 0))).unwrap();
        grid.set_detour(Some(p(1, 0))).unwrap();
        assert_eq!(grid[p(2, 0)].kind, NodeKind::Empty);
        assert_eq!(grid.reserved().len(), 3);
        grid.set_detour(None).unwrap();
        assert_eq!(grid[p(1, 0)].kind, NodeKind::Empty);
        assert!(!grid.has_detour());
    }

    #[test]
    fn test_apply_and_clear_maze_walls() {
        let mut grid = Grid::new(3, 3, p(0, 0), p(2, 2)).unwrap();
        let placed = grid.apply_maze(&[p(0, 0), p(0, 1), p(1, 1), p(5, 5)]);
        assert_eq!(placed, 2);
        assert_eq!(grid[p(0, 0)].kind, NodeKind::Start);
        assert_eq!(grid[p(1, 1)].kind, NodeKind::WallMaze);

        grid.set_wall(p(2, 0), true).unwrap();
        let reserved = grid.reserved();
        grid.clear_walls(&reserved);
        assert!(grid.all_nodes().all(|n| !n.is_wall()));
    }

    #[test]
    fn test_reset_run_state_skips_reserved() {
        let mut grid = Grid::new(2, 2, p(0, 0), p(1, 1)).unwrap();
        grid.set_wall(p(0, 1), true).unwrap();
        for pos in [p(0, 0), p(0, 1), p(1, 0), p(1, 1)] {
            grid[pos].run.distance = 1;
            grid[pos].run.is_visited = true;
            grid[pos].run.previous = Some(p(0, 0));
        }

        let reserved = grid.reserved();
        grid.reset_run_state(&reserved);
        assert_eq!(grid[p(1, 0)].run, RunState::default());
        assert_eq!(grid[p(0, 1)].kind, NodeKind::Wall);
        assert_eq!(grid[p(0, 0)].run.distance, 1);

        grid.clear_run_state();
        assert!(grid.all_nodes().all(|n| n.run == RunState::default()));
    }

    #[test]
    fn test_from_ascii_fixture() {
        let grid = Grid::from_ascii("
            S.#
            .D#
            ..F
        ");
        assert_eq!(grid.start(), p(0, 0));
        assert_eq!(grid.finish(), p(2, 2));
        assert_eq!(grid.detour(), Some(p(1, 1)));
        assert_eq!(grid[p(1, 2)].kind, NodeKind::Wall);
        assert_eq!(grid.summarize(&[p(0, 2)])[0].kind, NodeKind::Wall);
    }
}
