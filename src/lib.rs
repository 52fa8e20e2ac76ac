//! # tic-tac-mc
//!
//! Tic-tac-toe on an N×N board with a Monte-Carlo computer player.
//!
//! ## Design Principles
//!
//! 1. **Any Size**: The board is `dimension × dimension` for any
//!    dimension ≥ 1. Rows, columns and both diagonals are checked.
//!
//! 2. **Explicit Outcomes**: Win detection returns a `Decision`
//!    (winner, tie, or still pending) instead of overloading a cell value.
//!
//! 3. **Deterministic Randomness**: Every random choice flows through a
//!    seeded `GameRng`, so equal seeds give equal games.
//!
//! ## Architecture
//!
//! - **Rollout Evaluation**: The computer plays many uniformly random games
//!   from the current position, scores the finished boards square by
//!   square, and picks the best-scoring empty square.
//!
//! - **Persistent Data Structures**: Board cells live in an `im::Vector`,
//!   so the per-rollout clone is cheap.
//!
//! ## Modules
//!
//! - `core`: Players, cells, positions, RNG, errors
//! - `board`: The board, line enumeration and win detection
//! - `mc`: Monte-Carlo evaluator, rollout policy, scores and statistics
//! - `game`: Human-versus-computer controller and self-play

pub mod board;
pub mod core;
pub mod game;
pub mod mc;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{Cell, Error, GameRng, Player, Position, Result};

pub use crate::board::{Board, BoardSnapshot, Decision, Line, LineKind};

pub use crate::mc::{
    EvalStats, Evaluation, EvaluatorConfig, MonteCarloEvaluator,
    RolloutPolicy, ScoreGrid, UniformRollout,
};

pub use crate::game::{
    GameConfig, GameController, MatchRecord, MoveOutcome, MoveRecord,
    SelfPlayConfig, SelfPlaySummary, SelfPlayWorker,
};
