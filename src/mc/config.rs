//! Evaluator configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Monte-Carlo evaluator configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Rollouts per evaluation when none is given explicitly.
    pub trials: u32,

    /// Weight of cells held by the evaluated player.
    pub machine_score: f64,

    /// Weight of cells held by the opponent.
    pub human_score: f64,

    /// Random seed for rollouts and tie-breaking.
    /// Same seed produces deterministic evaluations.
    pub seed: u64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            trials: 20,
            machine_score: 1.0,
            human_score: 1.0,
            seed: 42,
        }
    }
}

impl EvaluatorConfig {
    /// Create a new config with a custom trial count.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Create a new config with a custom machine score.
    pub fn with_machine_score(mut self, score: f64) -> Self {
        self.machine_score = score;
        self
    }

    /// Create a new config with a custom human score.
    pub fn with_human_score(mut self, score: f64) -> Self {
        self.human_score = score;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject scores that would poison the accumulated grid.
    pub fn validate(&self) -> Result<()> {
        if !self.machine_score.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "machine_score must be finite, got {}",
                self.machine_score
            )));
        }
        if !self.human_score.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "human_score must be finite, got {}",
                self.human_score
            )));
        }
        Ok(())
    }
}
