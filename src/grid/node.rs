use crate::geometry::Position;


/// Distance and priority unit. Every move costs 1.
pub type Cost = u32;

/// Distance of a node no search has reached
pub const INFINITY: Cost = Cost::MAX;


/// What occupies a cell. Persistent across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NodeKind {
    #[default]
    Empty,
    Start,
    Finish,
    Detour,
    Wall, // placed by the user
    WallMaze, // placed by a maze generator
}

impl NodeKind {

    /// Walls of either origin are impassable
    pub fn is_wall(self) -> bool {
        matches!(self, NodeKind::Wall | NodeKind::WallMaze)
    }

    /// Start, finish and detour markers
    pub fn is_reserved(self) -> bool {
        matches!(self, NodeKind::Start | NodeKind::Finish | NodeKind::Detour)
    }

    /// Style class a presentation layer attaches to the cell
    pub fn class_name(self) -> &'static str {
        match self {
            NodeKind::Empty => "",
            NodeKind::Start => "start-node",
            NodeKind::Finish => "finish-node",
            NodeKind::Detour => "detour-node",
            NodeKind::Wall => "wall-node",
            NodeKind::WallMaze => "wall-node-maze",
        }
    }
}


/// Which back-pointer a search leg writes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link {
    /// `previous`, written by the leg that ends at the finish node
    Primary,
    /// `previous_detour`, written by the start -> detour leg
    Detour,
}

/// Which visitation flag a frontier settles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitFlag {
    Forward, // `is_visited`
    Backward, // `is_visited_by_finish`, bidirectional only
}


/// Book-keeping a single search run writes onto a node.
/// Cleared by `Grid::reset_run_state`, never touches `NodeKind`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunState {
    pub distance: Cost,
    /// A*/Greedy priority. The backward frontier of the bidirectional
    /// search keeps its distance-to-finish here.
    pub heuristic_distance: Cost,
    pub is_visited: bool,
    pub is_visited_by_finish: bool,
    pub previous: Option<Position>,
    pub previous_detour: Option<Position>,
    pub next: Option<Position>,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            distance: INFINITY,
            heuristic_distance: INFINITY,
            is_visited: false,
            is_visited_by_finish: false,
            previous: None,
            previous_detour: None,
            next: None,
        }
    }
}

impl RunState {

    pub fn link(&self, link: Link) -> Option<Position> {
        match link {
            Link::Primary => self.previous,
            Link::Detour => self.previous_detour,
        }
    }

    pub fn set_link(&mut self, link: Link, to: Option<Position>) {
        match link {
            Link::Primary => self.previous = to,
            Link::Detour => self.previous_detour = to,
        }
    }

    pub fn is_visited_by(&self, flag: VisitFlag) -> bool {
        match flag {
            VisitFlag::Forward => self.is_visited,
            VisitFlag::Backward => self.is_visited_by_finish,
        }
    }

    pub fn mark_visited(&mut self, flag: VisitFlag) {
        match flag {
            VisitFlag::Forward => self.is_visited = true,
            VisitFlag::Backward => self.is_visited_by_finish = true,
        }
    }

    /// Clear everything a leg uses to search, keep the back-pointers
    /// earlier legs left for path reconstruction.
    pub(crate) fn reset_search(&mut self) {
        *self = Self {
            previous: self.previous,
            previous_detour: self.previous_detour,
            ..Self::default()
        };
    }
}


/// One grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    row: usize,
    col: usize,
    pub kind: NodeKind,
    pub run: RunState,
}

impl Node {

    pub(crate) fn new(row: usize, col: usize) -> Self {
        Self { row, col, kind: NodeKind::Empty, run: RunState::default() }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    pub fn is_wall(&self) -> bool {
        self.kind.is_wall()
    }
}


/// The `{row, col, kind}` view handed to a presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSummary {
    pub row: usize,
    pub col: usize,
    pub kind: NodeKind,
}

impl From<&Node> for NodeSummary {
    fn from(node: &Node) -> Self {
        Self { row: node.row, col: node.col, kind: node.kind }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_search_keeps_links() {
        let mut state = RunState {
            distance: 4,
            heuristic_distance: 9,
            is_visited: true,
            is_visited_by_finish: true,
            previous: Some(Position::new(1, 1)),
            previous_detour: Some(Position::new(2, 2)),
            next: Some(Position::new(3, 3)),
        };
        state.reset_search();

        assert_eq!(state.distance, INFINITY);
        assert_eq!(state.heuristic_distance, INFINITY);
        assert!(!state.is_visited && !state.is_visited_by_finish);
        assert_eq!(state.next, None);
        assert_eq!(state.link(Link::Primary), Some(Position::new(1, 1)));
        assert_eq!(state.link(Link::Detour), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_kind_classes() {
        assert!(NodeKind::Wall.is_wall() && NodeKind::WallMaze.is_wall());
        assert!(!NodeKind::Detour.is_wall());
        assert!(NodeKind::Detour.is_reserved());
        assert_eq!(NodeKind::WallMaze.class_name(), "wall-node-maze");
    }
}
