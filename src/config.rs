use crate::geometry::Position;


/// Initial layout of a grid session
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub finish: Position,
    pub detour: Option<Position>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            start: Position::new(10, 10),
            finish: Position::new(10, 30),
            detour: None,
        }
    }
}

impl GridConfig {

    pub fn new(rows: usize, cols: usize, start: Position, finish: Position) -> Self {
        Self { rows, cols, start, finish, detour: None }
    }

    pub fn with_detour(mut self, detour: Position) -> Self {
        self.detour = Some(detour);
        self
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = GridConfig::default();
        assert_eq!((config.rows, config.cols), (20, 50));
        assert_eq!(config.start, Position::new(10, 10));
        assert_eq!(config.finish, Position::new(10, 30));
        assert!(config.detour.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_partial_json() {
        let config: GridConfig = serde_json::from_str(
            r#"{"rows": 7, "cols": 9, "detour": {"row": 3, "col": 4}}"#
        ).unwrap();
        assert_eq!((config.rows, config.cols), (7, 9));
        assert_eq!(config.start, GridConfig::default().start);
        assert_eq!(config.detour, Some(Position::new(3, 4)));
    }
}
