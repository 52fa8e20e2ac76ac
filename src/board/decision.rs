//! Outcome of win detection.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of [`Board::find_winner`](super::Board::find_winner).
///
/// A tie and an undecided board are distinct states; neither is encoded
/// through an empty cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// A player has won (after misère inversion, if enabled).
    Winner(Player),
    /// The board is full and no line is complete.
    Tie,
    /// No line is complete and empty cells remain.
    Pending,
}

impl Decision {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Decision::Pending)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Decision::Winner(p) => Some(p),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }

    /// End-of-game banner text. `None` while the game is undecided.
    #[must_use]
    pub const fn banner(self) -> Option<&'static str> {
        match self {
            Decision::Winner(Player::X) => Some("X wins!"),
            Decision::Winner(Player::O) => Some("O wins!"),
            Decision::Tie => Some("It's a tie!"),
            Decision::Pending => None,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.banner() {
            Some(text) => f.write_str(text),
            None => f.write_str("Undecided"),
        }
    }
}
