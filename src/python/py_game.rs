//! Game controller bindings for Python.

use pyo3::prelude::*;

use crate::core::Position;
use crate::game::{GameConfig, GameController, MoveOutcome};

use super::parse_player;
use super::py_board::{decision_label, PyBoard};

/// Python wrapper for GameController.
#[pyclass(name = "Game")]
pub struct PyGame(pub GameController);

#[pymethods]
impl PyGame {
    /// Start a human-versus-computer game.
    ///
    /// # Arguments
    /// - board_size: Side length (default: 3)
    /// - reverse: Misère mode (default: False)
    /// - trials: Rollouts per computer move (default: 20)
    /// - ai_player: "X" or "O"; X moves first (default: "X")
    /// - machine_score / human_score: Rollout scoring weights (default: 1.0)
    /// - seed: RNG seed (default: 42)
    #[new]
    #[pyo3(signature = (
        board_size = 3,
        reverse = false,
        trials = 20,
        ai_player = "X",
        machine_score = 1.0,
        human_score = 1.0,
        seed = 42
    ))]
    fn new(
        board_size: usize,
        reverse: bool,
        trials: u32,
        ai_player: &str,
        machine_score: f64,
        human_score: f64,
        seed: u64,
    ) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_board_size(board_size)
            .with_reverse(reverse)
            .with_trials(trials)
            .with_ai_player(parse_player(ai_player)?)
            .with_scores(machine_score, human_score)
            .with_seed(seed);
        Ok(Self(GameController::new(config)?))
    }

    /// Reset to an empty board with X to move.
    fn new_game(&mut self) -> PyResult<()> {
        Ok(self.0.new_game()?)
    }

    /// Play the human's move. Returns False if the cell was occupied.
    fn play(&mut self, row: usize, col: usize) -> PyResult<bool> {
        let outcome = self.0.play_human(Position::new(row, col))?;
        Ok(!matches!(outcome, MoveOutcome::Ignored(_)))
    }

    /// Let the computer move if it is its turn. Returns its move, if any.
    fn step(&mut self) -> PyResult<Option<(usize, usize)>> {
        let outcome = self.0.step()?;
        Ok(outcome.and_then(|outcome| match outcome {
            MoveOutcome::Placed(pos) | MoveOutcome::Finished(pos, _) => Some((pos.row, pos.col)),
            MoveOutcome::Ignored(_) => None,
        }))
    }

    #[getter]
    fn board(&self) -> PyBoard {
        PyBoard(self.0.board().clone())
    }

    #[getter]
    fn turn(&self) -> String {
        self.0.turn().to_string()
    }

    #[getter]
    fn in_progress(&self) -> bool {
        self.0.in_progress()
    }

    /// "X", "O", "tie", or None while the game runs.
    #[getter]
    fn result(&self) -> Option<String> {
        self.0.result().and_then(decision_label)
    }

    /// End-of-game banner text.
    #[getter]
    fn banner(&self) -> Option<&'static str> {
        self.0.result().and_then(|d| d.banner())
    }

    /// Moves so far as (player, row, col).
    fn history(&self) -> Vec<(String, usize, usize)> {
        self.0
            .history()
            .iter()
            .map(|m| (m.player.to_string(), m.position.row, m.position.col))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(ai={}, turn={}, in_progress={})",
            self.0.ai_player(),
            self.0.turn(),
            self.0.in_progress()
        )
    }
}
