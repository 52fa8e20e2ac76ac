//! Evaluator statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use crate::board::Decision;
use crate::core::Player;

/// Counters collected across evaluations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalStats {
    /// Completed evaluation calls.
    pub evaluations: u32,

    /// Rollouts played.
    pub rollouts: u64,

    /// Rollouts won by the evaluated player.
    pub rollout_wins: u64,

    /// Rollouts won by the opponent.
    pub rollout_losses: u64,

    /// Rollouts ending in a tie.
    pub rollout_ties: u64,

    /// Total time spent evaluating (microseconds).
    pub time_us: u64,
}

impl EvalStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one finished rollout from `player`'s point of view.
    pub fn record_rollout(&mut self, decision: Decision, player: Player) {
        self.rollouts += 1;
        match decision {
            Decision::Winner(winner) if winner == player => self.rollout_wins += 1,
            Decision::Winner(_) => self.rollout_losses += 1,
            Decision::Tie => self.rollout_ties += 1,
            Decision::Pending => {}
        }
    }

    /// Calculate rollouts per second.
    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.rollouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of rollouts won by the evaluated player.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rollouts == 0 {
            0.0
        } else {
            self.rollout_wins as f64 / self.rollouts as f64
        }
    }
}
