//! Monte-Carlo move evaluator.
//!
//! For each trial the board is cloned and played out at random to a
//! decision. The finished board is scored cell by cell into a grid that
//! starts at zero for every call. The move is drawn uniformly from the
//! cells that were empty on the input board and share the highest score.

use std::time::Instant;

use tracing::{debug, trace};

use crate::board::Board;
use crate::core::{Error, GameRng, Player, Position, Result};

use super::config::EvaluatorConfig;
use super::policy::{play_out, RolloutPolicy, UniformRollout};
use super::scores::ScoreGrid;
use super::stats::EvalStats;

/// Outcome of one evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// The recommended move, empty on the evaluated board.
    pub best: Position,

    /// Scores accumulated over all trials of this call.
    pub scores: ScoreGrid,

    /// Every empty cell sharing the highest score, in row-major order.
    pub candidates: Vec<Position>,

    /// Rollouts played.
    pub trials: u32,
}

/// Monte-Carlo evaluator context.
///
/// Owns the configuration, the seeded RNG stream and counters. Nothing
/// else survives from one evaluation to the next.
pub struct MonteCarloEvaluator {
    config: EvaluatorConfig,

    /// Tie-breaking stream; rollouts run on forks of it.
    rng: GameRng,

    policy: Box<dyn RolloutPolicy>,

    stats: EvalStats,
}

impl MonteCarloEvaluator {
    /// Create a new evaluator.
    pub fn new(config: EvaluatorConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            config,
            rng,
            policy: Box::new(UniformRollout),
            stats: EvalStats::default(),
        }
    }

    /// Set a custom rollout policy.
    pub fn with_policy<P: RolloutPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Recommend a move for `player` using the configured trial count.
    pub fn best_move(&mut self, board: &Board, player: Player) -> Result<Position> {
        self.evaluate(board, player, self.config.trials)
    }

    /// Recommend a move for `player` after `trials` rollouts.
    ///
    /// The result is always empty on `board`. Fails with
    /// [`Error::NoEmptyCells`] on a full board.
    pub fn evaluate(&mut self, board: &Board, player: Player, trials: u32) -> Result<Position> {
        self.analyze(board, player, trials).map(|evaluation| evaluation.best)
    }

    /// Like [`evaluate`](Self::evaluate), also returning the score grid
    /// and the tied candidates.
    pub fn analyze(&mut self, board: &Board, player: Player, trials: u32) -> Result<Evaluation> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(Error::NoEmptyCells);
        }

        let start = Instant::now();
        let mut scores = ScoreGrid::new(board.dimension());

        for trial in 0..trials {
            let mut scratch = board.clone();
            let mut rollout_rng = self.rng.fork();
            let decision = play_out(&mut scratch, player, self.policy.as_ref(), &mut rollout_rng);

            trace!(trial, %decision, "rollout finished");

            scores.record_rollout(&scratch, decision, player, &self.config)?;
            self.stats.record_rollout(decision, player);
        }

        let candidates = scores.best_among(&empty)?;
        let best = *self.rng.choose(&candidates).ok_or(Error::NoEmptyCells)?;

        let best_score = scores.get(best)?;

        self.stats.evaluations += 1;
        self.stats.time_us += u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        debug!(
            %player,
            trials,
            %best,
            score = best_score,
            tied = candidates.len(),
            "evaluation finished"
        );

        Ok(Evaluation {
            best,
            scores,
            candidates: candidates.into_vec(),
            trials,
        })
    }

    /// Get evaluator statistics.
    #[must_use]
    pub fn stats(&self) -> &EvalStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }
}

impl Default for MonteCarloEvaluator {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default())
    }
}

impl std::fmt::Debug for MonteCarloEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonteCarloEvaluator")
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn test_returns_empty_cell() {
        let board = Board::parse(&["XO_", "_X_", "O__"], false).unwrap();
        let mut evaluator = MonteCarloEvaluator::default();

        for trials in [0, 1, 10, 100] {
            let pos = evaluator.evaluate(&board, Player::O, trials).unwrap();
            assert_eq!(board.cell(pos).unwrap(), Cell::Empty);
        }
    }

    #[test]
    fn test_full_board_rejected() {
        let board = Board::parse(&["XOX", "XOO", "OXX"], false).unwrap();
        let mut evaluator = MonteCarloEvaluator::default();

        assert_eq!(evaluator.evaluate(&board, Player::X, 10), Err(Error::NoEmptyCells));
        assert_eq!(evaluator.stats().evaluations, 0);
    }

    #[test]
    fn test_single_empty_cell() {
        let board = Board::parse(&["XOX", "XO_", "OXO"], false).unwrap();
        let mut evaluator = MonteCarloEvaluator::default();

        for trials in [0, 5, 50] {
            assert_eq!(
                evaluator.evaluate(&board, Player::X, trials).unwrap(),
                Position::new(1, 2)
            );
        }
    }

    #[test]
    fn test_input_board_untouched() {
        let board = Board::parse(&["X__", "_O_", "___"], false).unwrap();
        let before = board.clone();
        let mut evaluator = MonteCarloEvaluator::default();

        evaluator.evaluate(&board, Player::X, 200).unwrap();

        assert_eq!(board, before);
    }

    #[test]
    fn test_zero_trials_all_tied() {
        let board = Board::parse(&["X__", "_O_", "___"], false).unwrap();
        let mut evaluator = MonteCarloEvaluator::default();

        let evaluation = evaluator.analyze(&board, Player::X, 0).unwrap();

        assert_eq!(evaluation.scores, ScoreGrid::new(3));
        assert_eq!(evaluation.candidates, board.empty_cells().into_vec());
        assert_eq!(evaluator.stats().rollouts, 0);
    }

    #[test]
    fn test_best_has_max_score_among_empty() {
        let board = Board::parse(&["X__", "_O_", "__X"], false).unwrap();
        let mut evaluator = MonteCarloEvaluator::default();

        let evaluation = evaluator.analyze(&board, Player::O, 300).unwrap();
        let empty = board.empty_cells();
        let max = evaluation.scores.max_over(&empty).unwrap().unwrap();

        assert_eq!(evaluation.scores.get(evaluation.best).unwrap(), max);
        assert!(evaluation.candidates.contains(&evaluation.best));
        for pos in &evaluation.candidates {
            assert_eq!(board.cell(*pos).unwrap(), Cell::Empty);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let board = Board::new(3, false).unwrap();
        let config = EvaluatorConfig::default().with_seed(12345);

        let mut eval1 = MonteCarloEvaluator::new(config.clone());
        let mut eval2 = MonteCarloEvaluator::new(config);

        let a = eval1.analyze(&board, Player::X, 100).unwrap();
        let b = eval2.analyze(&board, Player::X, 100).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_scores_not_carried_between_calls() {
        let board = Board::new(1, false).unwrap();
        let mut evaluator = MonteCarloEvaluator::default();

        let first = evaluator.analyze(&board, Player::X, 3).unwrap();
        let second = evaluator.analyze(&board, Player::X, 0).unwrap();

        assert_eq!(first.scores.get(Position::new(0, 0)).unwrap(), -3.0);
        assert_eq!(second.scores, ScoreGrid::new(1));
    }

    #[test]
    fn test_stats_accumulate() {
        let board = Board::new(3, false).unwrap();
        let mut evaluator = MonteCarloEvaluator::default();

        evaluator.evaluate(&board, Player::X, 30).unwrap();
        evaluator.evaluate(&board, Player::O, 20).unwrap();

        let stats = evaluator.stats();
        assert_eq!(stats.evaluations, 2);
        assert_eq!(stats.rollouts, 50);
        assert_eq!(
            stats.rollout_wins + stats.rollout_losses + stats.rollout_ties,
            50
        );
    }

    #[test]
    fn test_time_accumulates_without_wrapping() {
        let board = Board::new(3, false).unwrap();
        let mut evaluator = MonteCarloEvaluator::default();

        evaluator.evaluate(&board, Player::X, 10).unwrap();
        let after_first = evaluator.stats().time_us;
        evaluator.evaluate(&board, Player::X, 10).unwrap();

        assert!(evaluator.stats().time_us >= after_first);
    }

    #[test]
    fn test_best_move_uses_config_trials() {
        let board = Board::new(3, false).unwrap();
        let mut evaluator = MonteCarloEvaluator::new(EvaluatorConfig::default().with_trials(7));

        evaluator.best_move(&board, Player::X).unwrap();

        assert_eq!(evaluator.stats().rollouts, 7);
    }

    #[test]
    fn test_decided_rollout_on_dimension_one() {
        let board = Board::new(1, false).unwrap();
        let mut evaluator = MonteCarloEvaluator::default();

        let evaluation = evaluator.analyze(&board, Player::X, 4).unwrap();

        // X always wins its own rollout, so its cell is penalized each time.
        assert_eq!(evaluation.best, Position::new(0, 0));
        assert_eq!(evaluation.scores.get(Position::new(0, 0)).unwrap(), -4.0);
        assert_eq!(evaluator.stats().rollout_wins, 4);
    }
}
