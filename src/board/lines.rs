//! Line enumeration for win detection.
//!
//! A board of dimension `d` has `2 * d + 2` lines, always produced in the
//! same order: rows top to bottom, columns left to right, the main
//! diagonal, then the anti-diagonal. When several lines are complete at
//! once, the first one in this order decides the winner.

use smallvec::SmallVec;

use crate::core::Position;

/// Positions along one line. Inline for boards up to 8x8.
pub type Positions = SmallVec<[Position; 8]>;

/// Which line of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl LineKind {
    /// Cells along this line for a board of the given dimension, starting
    /// at the line's first cell.
    #[must_use]
    pub fn positions(self, dimension: usize) -> Positions {
        match self {
            LineKind::Row(row) => (0..dimension).map(|col| Position::new(row, col)).collect(),
            LineKind::Column(col) => (0..dimension).map(|row| Position::new(row, col)).collect(),
            LineKind::MainDiagonal => (0..dimension).map(|i| Position::new(i, i)).collect(),
            LineKind::AntiDiagonal => (0..dimension)
                .map(|i| Position::new(i, dimension - i - 1))
                .collect(),
        }
    }
}

/// A line and the positions it covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub positions: Positions,
}

impl Line {
    #[must_use]
    pub fn new(kind: LineKind, dimension: usize) -> Self {
        Self {
            kind,
            positions: kind.positions(dimension),
        }
    }
}

/// Iterate over the line kinds of a board in win-detection order.
pub fn line_kinds(dimension: usize) -> impl Iterator<Item = LineKind> {
    (0..dimension)
        .map(LineKind::Row)
        .chain((0..dimension).map(LineKind::Column))
        .chain([LineKind::MainDiagonal, LineKind::AntiDiagonal])
}
