//! Core types: players, cells, positions, RNG, errors.
//!
//! These are the building blocks shared by the board, the evaluator and
//! the game controller.

pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use error::{Error, Result};
pub use player::{Cell, Player};
pub use position::Position;
pub use rng::GameRng;
