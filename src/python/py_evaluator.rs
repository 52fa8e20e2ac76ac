//! Evaluator bindings for Python.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::mc::{Evaluation, EvaluatorConfig, MonteCarloEvaluator};

use super::parse_player;
use super::py_board::PyBoard;

/// Python wrapper for an analysis result.
#[pyclass(name = "Evaluation")]
#[derive(Clone, Debug)]
pub struct PyEvaluation(pub Evaluation);

#[pymethods]
impl PyEvaluation {
    /// Recommended move as (row, col).
    #[getter]
    fn best(&self) -> (usize, usize) {
        (self.0.best.row, self.0.best.col)
    }

    /// Cells tied for the best score.
    #[getter]
    fn candidates(&self) -> Vec<(usize, usize)> {
        self.0.candidates.iter().map(|p| (p.row, p.col)).collect()
    }

    #[getter]
    fn trials(&self) -> u32 {
        self.0.trials
    }

    /// Accumulated scores as a (dimension, dimension) float64 array.
    #[getter]
    fn scores<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f64>>> {
        PyArray2::from_vec2_bound(py, &self.0.scores.rows())
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    fn __repr__(&self) -> String {
        format!(
            "Evaluation(best=({}, {}), candidates={}, trials={})",
            self.0.best.row,
            self.0.best.col,
            self.0.candidates.len(),
            self.0.trials
        )
    }
}

/// Python wrapper for MonteCarloEvaluator.
#[pyclass(name = "Evaluator")]
pub struct PyEvaluator(pub MonteCarloEvaluator);

#[pymethods]
impl PyEvaluator {
    /// Create an evaluator.
    ///
    /// # Arguments
    /// - trials: Rollouts per move for `best_move` (default: 20)
    /// - machine_score: Score for the evaluated player's squares (default: 1.0)
    /// - human_score: Score for the opponent's squares (default: 1.0)
    /// - seed: RNG seed (default: 42)
    #[new]
    #[pyo3(signature = (trials = 20, machine_score = 1.0, human_score = 1.0, seed = 42))]
    fn new(trials: u32, machine_score: f64, human_score: f64, seed: u64) -> PyResult<Self> {
        let config = EvaluatorConfig::default()
            .with_trials(trials)
            .with_machine_score(machine_score)
            .with_human_score(human_score)
            .with_seed(seed);
        config.validate()?;
        Ok(Self(MonteCarloEvaluator::new(config)))
    }

    /// Best move for `player` with the configured trial count.
    fn best_move(&mut self, board: &PyBoard, player: &str) -> PyResult<(usize, usize)> {
        let pos = self.0.best_move(&board.0, parse_player(player)?)?;
        Ok((pos.row, pos.col))
    }

    /// Best move for `player` after `trials` rollouts.
    fn evaluate(&mut self, board: &PyBoard, player: &str, trials: u32) -> PyResult<(usize, usize)> {
        let pos = self.0.evaluate(&board.0, parse_player(player)?, trials)?;
        Ok((pos.row, pos.col))
    }

    /// Full analysis: best move, tied candidates and the score grid.
    #[pyo3(signature = (board, player, trials = None))]
    fn analyze(&mut self, board: &PyBoard, player: &str, trials: Option<u32>) -> PyResult<PyEvaluation> {
        let trials = trials.unwrap_or(self.0.config().trials);
        let evaluation = self.0.analyze(&board.0, parse_player(player)?, trials)?;
        Ok(PyEvaluation(evaluation))
    }

    /// Total rollouts played so far.
    #[getter]
    fn rollouts(&self) -> u64 {
        self.0.stats().rollouts
    }

    fn __repr__(&self) -> String {
        format!("Evaluator(trials={})", self.0.config().trials)
    }
}
