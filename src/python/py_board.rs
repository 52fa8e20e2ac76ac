//! Board bindings for Python.

use pyo3::prelude::*;

use crate::board::{Board, Decision};
use crate::core::Player;

use super::parse_player;

/// Python wrapper for Board.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create an empty board.
    ///
    /// # Arguments
    /// - dimension: Side length, at least 1 (default: 3)
    /// - reverse_win: Misère mode, completing a line loses (default: False)
    #[new]
    #[pyo3(signature = (dimension = 3, reverse_win = false))]
    fn new(dimension: usize, reverse_win: bool) -> PyResult<Self> {
        Ok(Self(Board::new(dimension, reverse_win)?))
    }

    /// Build a board from row strings such as `["X_O", "___", "O_X"]`.
    #[staticmethod]
    #[pyo3(signature = (rows, reverse_win = false))]
    fn parse(rows: Vec<String>, reverse_win: bool) -> PyResult<Self> {
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        Ok(Self(Board::parse(&rows, reverse_win)?))
    }

    #[getter]
    fn dimension(&self) -> usize {
        self.0.dimension()
    }

    #[getter]
    fn reverse_win(&self) -> bool {
        self.0.reverse_win()
    }

    /// Cell contents: "X", "O" or None.
    fn square(&self, row: usize, col: usize) -> PyResult<Option<String>> {
        let cell = self.0.cell_at(row, col)?;
        Ok(cell.player().map(|p| p.to_string()))
    }

    /// Place a mark. Returns False if the cell was already occupied.
    fn place(&mut self, row: usize, col: usize, player: &str) -> PyResult<bool> {
        let player = parse_player(player)?;
        Ok(self.0.place(row, col, player)?)
    }

    /// Empty cells as (row, col) tuples in row-major order.
    fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.0
            .empty_cells()
            .iter()
            .map(|pos| (pos.row, pos.col))
            .collect()
    }

    /// "X", "O", "tie", or None while undecided.
    fn winner(&self) -> Option<String> {
        decision_label(self.0.find_winner())
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Board(dimension={}, reverse_win={}, empty={})",
            self.0.dimension(),
            self.0.reverse_win(),
            self.0.empty_count()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) fn decision_label(decision: Decision) -> Option<String> {
    match decision {
        Decision::Winner(Player::X) => Some("X".to_string()),
        Decision::Winner(Player::O) => Some("O".to_string()),
        Decision::Tie => Some("tie".to_string()),
        Decision::Pending => None,
    }
}
