//! Game flow on top of the board and evaluator.
//!
//! [`GameController`] runs a human-versus-computer game and
//! [`SelfPlayWorker`] pits two evaluators against each other.

mod config;
mod controller;
pub mod self_play;

pub use config::GameConfig;
pub use controller::{GameController, MoveOutcome, MoveRecord};
pub use self_play::{MatchRecord, SelfPlayConfig, SelfPlaySummary, SelfPlayWorker};
