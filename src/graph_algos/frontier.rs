use crate::geometry::Position;
use crate::grid::Cost;

use std::{collections::BinaryHeap, cmp::Ordering};


/// Frontier entry
/// - ordered by priority, then tie-break, then insertion order
/// - the node itself lives on the grid, the entry only identifies it
#[derive(Debug)]
pub(crate) struct Entry {
    pub position: Position,
    pub priority: Cost, // priority when pushed, stale once the node is re-labelled
    tie_break: Cost,
    order: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the largest, so every key is reversed
        other.priority.cmp(&self.priority)
            .then_with(|| other.tie_break.cmp(&self.tie_break))
            .then_with(|| other.order.cmp(&self.order))
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Entry {}


/// Min-priority queue of positions with lazy deletion: a node may be
/// pushed again with a better priority, callers skip the stale entries.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    pushed: u64,
}

impl Frontier {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: Position, priority: Cost, tie_break: Cost) {
        self.heap.push(Entry { position, priority, tie_break, order: self.pushed });
        self.pushed += 1;
    }

    /// Entry with the lowest priority, earliest pushed among equals
    pub fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_priority_first() {
        let mut frontier = Frontier::new();
        frontier.push(Position::new(0, 0), 5, 0);
        frontier.push(Position::new(0, 1), 2, 0);
        frontier.push(Position::new(0, 2), 9, 0);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).map(|e| e.priority).collect();
        assert_eq!(order, vec![2, 5, 9]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_ties_use_tie_break_then_insertion_order() {
        let mut frontier = Frontier::new();
        frontier.push(Position::new(0, 0), 4, 3);
        frontier.push(Position::new(0, 1), 4, 1);
        frontier.push(Position::new(0, 2), 4, 1);

        assert_eq!(frontier.pop().unwrap().position, Position::new(0, 1));
        assert_eq!(frontier.pop().unwrap().position, Position::new(0, 2));
        assert_eq!(frontier.pop().unwrap().position, Position::new(0, 0));
    }
}
