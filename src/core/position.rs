//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A (row, col) board coordinate, both 0-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(1, 2)), "(1, 2)");
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut positions = vec![Position::new(1, 0), Position::new(0, 2), Position::new(0, 1)];
        positions.sort();
        assert_eq!(
            positions,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Position::from((2, 1)), Position::new(2, 1));
    }
}
