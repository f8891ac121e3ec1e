use std::fmt;
use num_traits::Num;


/// Absolute difference that also works for unsigned coordinates
fn abs_diff<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
    {
    if a > b { a - b } else { b - a }
}

/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + PartialOrd + Copy,
    {
    abs_diff(x1, x2) + abs_diff(y1, y2)
}


/// Cell coordinate on the grid, row-major
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell, the A* and Greedy heuristic
    pub fn manhattan(&self, other: &Position) -> usize {
        manhattan_distance(self.row, self.col, other.row, other.col)
    }

    /// True when the two cells share an edge
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan(other) == 1
    }

    /// Step one cell in `direction`, `None` when that would leave a `rows` x `cols` grid
    pub fn step(&self, direction: Direction, rows: usize, cols: usize) -> Option<Position> {
        self.offset(direction, 1, rows, cols)
    }

    /// Move `distance` cells in `direction`, bounds-checked (no wraparound)
    pub fn offset(&self, direction: Direction, distance: usize, rows: usize, cols: usize) -> Option<Position> {
        let (row, col) = match direction {
            Direction::Right => (Some(self.row), self.col.checked_add(distance)),
            Direction::Up => (self.row.checked_sub(distance), Some(self.col)),
            Direction::Left => (Some(self.row), self.col.checked_sub(distance)),
            Direction::Down => (self.row.checked_add(distance), Some(self.col)),
        };
        match (row, col) {
            (Some(row), Some(col)) if row < rows && col < cols => Some(Position { row, col }),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}


/// Orthogonal move on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// Neighbor order used by every search: right, up, left, down.
    /// Visitation order in ties depends on it.
    pub const ORDER: [Direction; 4] = [Direction::Right, Direction::Up, Direction::Left, Direction::Down];
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance_signed_and_unsigned() {
        assert_eq!(manhattan_distance(0i32, 0, -3, 4), 7);
        assert_eq!(manhattan_distance(5usize, 1, 2, 3), 5);
        assert_eq!(Position::new(0, 0).manhattan(&Position::new(4, 4)), 8);
    }

    #[test]
    fn test_step_is_bounds_checked() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3, 3), None);
        assert_eq!(corner.step(Direction::Left, 3, 3), None);
        assert_eq!(corner.step(Direction::Right, 3, 3), Some(Position::new(0, 1)));
        assert_eq!(corner.step(Direction::Down, 3, 3), Some(Position::new(1, 0)));

        let far = Position::new(2, 2);
        assert_eq!(far.step(Direction::Right, 3, 3), None);
        assert_eq!(far.step(Direction::Down, 3, 3), None);
        assert_eq!(far.offset(Direction::Up, 2, 3, 3), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_adjacency() {
        let p = Position::new(3, 3);
        assert!(p.is_adjacent(&Position::new(3, 4)));
        assert!(!p.is_adjacent(&Position::new(4, 4)));
        assert!(!p.is_adjacent(&p));
    }
}
