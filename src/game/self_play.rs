//! Computer-versus-computer matches.
//!
//! Both sides are Monte-Carlo evaluators, each with its own trial count
//! and RNG stream. Used to compare trial budgets and to exercise the
//! evaluator end to end.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Decision};
use crate::core::{Player, Result};
use crate::mc::{EvaluatorConfig, MonteCarloEvaluator};

use super::controller::MoveRecord;

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    pub board_size: usize,

    pub reverse: bool,

    /// Rollouts per move for X.
    pub trials_x: u32,

    /// Rollouts per move for O.
    pub trials_o: u32,

    pub machine_score: f64,

    pub human_score: f64,

    /// Seed offset for RNG (combined with game index for unique seeds).
    pub seed_offset: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            reverse: false,
            trials_x: 20,
            trials_o: 20,
            machine_score: 1.0,
            human_score: 1.0,
            seed_offset: 0,
        }
    }
}

impl SelfPlayConfig {
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

    /// Set rollouts per move for both sides.
    pub fn with_trials(mut self, trials_x: u32, trials_o: u32) -> Self {
        self.trials_x = trials_x;
        self.trials_o = trials_o;
        self
    }

    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Rollouts per move for a side.
    #[must_use]
    pub fn trials_for(&self, player: Player) -> u32 {
        match player {
            Player::X => self.trials_x,
            Player::O => self.trials_o,
        }
    }

    fn evaluator_config(&self, player: Player, seed: u64) -> EvaluatorConfig {
        let side_seed = match player {
            Player::X => seed,
            Player::O => seed ^ 0xD1B5_4A32_D192_ED03,
        };
        EvaluatorConfig::default()
            .with_trials(self.trials_for(player))
            .with_machine_score(self.machine_score)
            .with_human_score(self.human_score)
            .with_seed(side_seed)
    }
}

/// A finished self-play game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    pub seed: u64,
    pub moves: Vec<MoveRecord>,
    pub result: Decision,
    pub final_board: Board,
}

/// Tally of self-play results.
#[derive(Clone, Debug, Default)]
pub struct SelfPlaySummary {
    results: FxHashMap<Decision, u32>,
}

impl SelfPlaySummary {
    pub fn record(&mut self, result: Decision) {
        *self.results.entry(result).or_insert(0) += 1;
    }

    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        self.count(Decision::Winner(player))
    }

    #[must_use]
    pub fn ties(&self) -> u32 {
        self.count(Decision::Tie)
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.results.values().sum()
    }

    fn count(&self, result: Decision) -> u32 {
        self.results.get(&result).copied().unwrap_or(0)
    }
}

/// Worker for running self-play games.
#[derive(Clone, Debug)]
pub struct SelfPlayWorker {
    config: SelfPlayConfig,
}

impl SelfPlayWorker {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    /// Play one game from an empty board, X first, until it is decided.
    pub fn play_game(&self, seed: u64) -> Result<MatchRecord> {
        let mut board = Board::new(self.config.board_size, self.config.reverse)?;
        let x_config = self.config.evaluator_config(Player::X, seed);
        let o_config = self.config.evaluator_config(Player::O, seed);
        x_config.validate()?;
        o_config.validate()?;
        let mut x = MonteCarloEvaluator::new(x_config);
        let mut o = MonteCarloEvaluator::new(o_config);

        let mut moves = Vec::new();
        let mut mover = Player::X;

        let result = loop {
            let decision = board.find_winner();
            if decision.is_decided() {
                break decision;
            }

            let evaluator = match mover {
                Player::X => &mut x,
                Player::O => &mut o,
            };
            let position = evaluator.best_move(&board, mover)?;
            board.place_at(position, mover)?;
            moves.push(MoveRecord {
                player: mover,
                position,
            });
            mover = mover.opponent();
        };

        debug!(seed, %result, moves = moves.len(), "self-play game finished");

        Ok(MatchRecord {
            seed,
            moves,
            result,
            final_board: board,
        })
    }

    /// Play `games` games with consecutive seeds starting at the offset.
    pub fn play_games(&self, games: u32) -> Result<(Vec<MatchRecord>, SelfPlaySummary)> {
        let mut records = Vec::with_capacity(games as usize);
        let mut summary = SelfPlaySummary::default();

        for game in 0..games {
            let record = self.play_game(self.config.seed_offset.wrapping_add(game as u64))?;
            summary.record(record.result);
            records.push(record);
        }

        Ok((records, summary))
    }

    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }
}
