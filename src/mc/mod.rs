//! Monte-Carlo rollout move evaluator.
//!
//! ## Overview
//!
//! Given a board and the player to move, the evaluator plays many random
//! games to completion on clones of the board, scores each finished board
//! cell by cell, and picks the empty cell with the highest accumulated
//! score. Ties are broken uniformly at random.
//!
//! ## Usage
//!
//! ```rust
//! use tic_tac_mc::board::Board;
//! use tic_tac_mc::core::Player;
//! use tic_tac_mc::mc::{EvaluatorConfig, MonteCarloEvaluator};
//!
//! let board = Board::parse(&["X__", "_O_", "___"], false).unwrap();
//! let mut evaluator = MonteCarloEvaluator::new(EvaluatorConfig::default().with_seed(7));
//!
//! let pos = evaluator.evaluate(&board, Player::X, 100).unwrap();
//! assert!(board.cell(pos).unwrap().is_empty());
//! ```
//!
//! ## Scoring
//!
//! Scores are credited to every occupied cell of the finished rollout
//! board at that cell's own coordinate. When the evaluated player wins a
//! rollout its cells are penalized and the opponent's rewarded; when the
//! opponent wins the signs flip. Ties score nothing.

pub mod config;
pub mod evaluator;
pub mod policy;
pub mod scores;
pub mod stats;

pub use config::EvaluatorConfig;
pub use evaluator::{Evaluation, MonteCarloEvaluator};
pub use policy::{play_out, RolloutPolicy, UniformRollout};
pub use scores::ScoreGrid;
pub use stats::EvalStats;
