//! Crate error type.

use thiserror::Error;

use super::Player;

/// Errors raised by board construction, coordinate access, move
/// evaluation and the game controller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Board dimension must be at least 1, got {0}")]
    InvalidDimension(usize),

    #[error("Cell ({row}, {col}) is outside a {dimension}x{dimension} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("No empty cells left to play")]
    NoEmptyCells,

    #[error("Invalid board character {0:?}")]
    InvalidCell(char),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("The game is over")]
    GameOver,

    #[error("It is {0}'s turn")]
    NotYourTurn(Player),
}

/// Convenience Result type for board and evaluator operations.
pub type Result<T> = std::result::Result<T, Error>;
