//! The square game board.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, Error, Player, Position, Result};

use super::decision::Decision;
use super::lines::{line_kinds, Line};

/// Empty-cell list. Inline for boards up to 4x4.
pub type EmptyCells = SmallVec<[Position; 16]>;

/// A fixed-dimension square board of cells.
///
/// Cells live in a persistent vector, so cloning is O(1) and a clone
/// shares structure with its source until either side is mutated. Each
/// side sees only its own writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct Board {
    dimension: usize,
    reverse_win: bool,
    /// Row-major cells, `dimension * dimension` long.
    cells: Vector<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`Error::InvalidDimension`] when `dimension` is 0.
    pub fn new(dimension: usize, reverse_win: bool) -> Result<Self> {
        Self::from_grid(dimension, reverse_win, &[])
    }

    /// Create a board seeded from an existing grid of rows.
    ///
    /// Missing rows or entries are empty; anything beyond `dimension` is
    /// ignored.
    pub fn from_grid(dimension: usize, reverse_win: bool, grid: &[Vec<Cell>]) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::InvalidDimension(dimension));
        }

        let cells = (0..dimension)
            .flat_map(|row| {
                (0..dimension).map(move |col| {
                    grid.get(row)
                        .and_then(|r| r.get(col))
                        .copied()
                        .unwrap_or_default()
                })
            })
            .collect();

        Ok(Self {
            dimension,
            reverse_win,
            cells,
        })
    }

    /// Build a board from text rows, one string per row.
    ///
    /// The dimension is the number of rows. `X`/`O` (either case) are
    /// players; space, `.` and `_` are empty.
    ///
    /// ```
    /// use tic_tac_mc::board::{Board, Decision};
    /// use tic_tac_mc::core::Player;
    ///
    /// let board = Board::parse(&["XXX", "_O_", "O__"], false).unwrap();
    /// assert_eq!(board.find_winner(), Decision::Winner(Player::X));
    /// ```
    pub fn parse(rows: &[&str], reverse_win: bool) -> Result<Self> {
        let grid = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| Cell::from_symbol(c).ok_or(Error::InvalidCell(c)))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_grid(rows.len(), reverse_win, &grid)
    }

    /// Side length of the board.
    #[inline]
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether completing a line awards the win to the opponent.
    #[inline]
    #[must_use]
    pub fn reverse_win(&self) -> bool {
        self.reverse_win
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.dimension || col >= self.dimension {
            return Err(Error::OutOfBounds {
                row,
                col,
                dimension: self.dimension,
            });
        }
        Ok(row * self.dimension + col)
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.dimension, index % self.dimension)
    }

    /// State of the cell at (row, col).
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// State of the cell at a position.
    pub fn cell(&self, pos: Position) -> Result<Cell> {
        self.cell_at(pos.row, pos.col)
    }

    /// Place `player` at (row, col) if the cell is empty.
    ///
    /// Returns `Ok(true)` if the mark was placed and `Ok(false)` if the
    /// cell was already occupied, in which case nothing changes.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<bool> {
        let idx = self.index(row, col)?;
        if !self.cells[idx].is_empty() {
            return Ok(false);
        }
        self.cells[idx] = Cell::Occupied(player);
        Ok(true)
    }

    /// [`place`](Self::place) by position.
    pub fn place_at(&mut self, pos: Position, player: Player) -> Result<bool> {
        self.place(pos.row, pos.col, player)
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| self.position_of(i))
            .collect()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterate over `(position, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.position_of(i), *cell))
    }

    /// Call `visitor` for every cell in row-major order.
    pub fn for_each_cell<F>(&self, mut visitor: F)
    where
        F: FnMut(Position, Cell),
    {
        for (pos, cell) in self.cells() {
            visitor(pos, cell);
        }
    }

    /// Copy of the cells as a row-major grid.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.dimension)
            .map(|row| {
                let start = row * self.dimension;
                self.cells
                    .iter()
                    .skip(start)
                    .take(self.dimension)
                    .copied()
                    .collect()
            })
            .collect()
    }

    /// All lines in win-detection order.
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        let dimension = self.dimension;
        line_kinds(dimension).map(move |kind| Line::new(kind, dimension))
    }

    /// Player holding every cell of a line, if any.
    fn line_owner(&self, line: &Line) -> Option<Player> {
        let positions = &line.positions;
        let first = self.cells[self.position_index(*positions.first()?)];
        let owner = first.player()?;

        positions
            .iter()
            .all(|&pos| self.cells[self.position_index(pos)] == first)
            .then_some(owner)
    }

    /// Index of a position produced by line enumeration, always in range.
    #[inline]
    fn position_index(&self, pos: Position) -> usize {
        pos.row * self.dimension + pos.col
    }

    /// Decide the game state.
    ///
    /// The first complete line in enumeration order (rows, columns, main
    /// diagonal, anti-diagonal) decides the winner; in misère mode the
    /// opponent of that line's owner wins. Otherwise a full board is a
    /// tie and anything else is still pending.
    #[must_use]
    pub fn find_winner(&self) -> Decision {
        let completed = self.lines().find_map(|line| self.line_owner(&line));

        match completed {
            Some(owner) if self.reverse_win => Decision::Winner(owner.opponent()),
            Some(owner) => Decision::Winner(owner),
            None if self.is_full() => Decision::Tie,
            None => Decision::Pending,
        }
    }
}

impl std::fmt::Display for Board {
    /// Rows of `|`-separated symbols with a dashed separator between rows.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = "-".repeat(self.dimension + 2);

        for (row, cells) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f, "{}", separator)?;
            }
            let line: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

/// Serialized form of a [`Board`]. Deserializing validates the dimension.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub dimension: usize,
    pub reverse_win: bool,
    pub rows: Vec<Vec<Cell>>,
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        Self {
            dimension: board.dimension,
            reverse_win: board.reverse_win,
            rows: board.rows(),
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = Error;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        Board::from_grid(snapshot.dimension, snapshot.reverse_win, &snapshot.rows)
    }
}
