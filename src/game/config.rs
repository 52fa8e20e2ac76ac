//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Player, Result};
use crate::mc::EvaluatorConfig;

/// Settings for a human-versus-computer game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    pub board_size: usize,

    /// Misère mode: completing a line hands the win to the opponent.
    pub reverse: bool,

    /// Rollouts per computer move.
    pub trials: u32,

    /// The side the computer plays. X moves first.
    pub ai_player: Player,

    /// Score for squares played by the computer.
    pub machine_score: f64,

    /// Score for squares played by the other player.
    pub human_score: f64,

    /// Seed for the computer's RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            reverse: false,
            trials: 20,
            ai_player: Player::X,
            machine_score: 1.0,
            human_score: 1.0,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_ai_player(mut self, player: Player) -> Self {
        self.ai_player = player;
        self
    }

    pub fn with_scores(mut self, machine_score: f64, human_score: f64) -> Self {
        self.machine_score = machine_score;
        self.human_score = human_score;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The human's side.
    #[must_use]
    pub fn human_player(&self) -> Player {
        self.ai_player.opponent()
    }

    /// Evaluator settings for the computer player.
    #[must_use]
    pub fn evaluator_config(&self) -> EvaluatorConfig {
        EvaluatorConfig::default()
            .with_trials(self.trials)
            .with_machine_score(self.machine_score)
            .with_human_score(self.human_score)
            .with_seed(self.seed)
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(Error::InvalidDimension(self.board_size));
        }
        self.evaluator_config().validate()
    }
}
