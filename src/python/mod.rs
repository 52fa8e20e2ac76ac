//! Python bindings for tic-tac-mc.
//!
//! # Quick Start
//!
//! ```python
//! import tic_tac_mc as ttt
//!
//! board = ttt.Board.parse(["X__", "_O_", "___"])
//! evaluator = ttt.Evaluator(trials=200, seed=7)
//!
//! row, col = evaluator.best_move(board, "X")
//! scores = evaluator.analyze(board, "X").scores  # numpy (3, 3) float64
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Cell, Error, Player};

mod py_board;
mod py_evaluator;
mod py_game;

pub use py_board::*;
pub use py_evaluator::*;
pub use py_game::*;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Parse `"X"` or `"O"` (either case).
pub(crate) fn parse_player(symbol: &str) -> PyResult<Player> {
    let mut chars = symbol.chars();
    match (chars.next().and_then(Cell::from_symbol), chars.next()) {
        (Some(Cell::Occupied(player)), None) => Ok(player),
        _ => Err(PyValueError::new_err(format!(
            "Expected 'X' or 'O', got {:?}",
            symbol
        ))),
    }
}

/// tic-tac-mc: tic-tac-toe with a Monte-Carlo computer player.
#[pymodule]
fn tic_tac_mc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_class::<PyEvaluation>()?;
    m.add_class::<PyEvaluator>()?;
    m.add_class::<PyGame>()?;

    Ok(())
}
