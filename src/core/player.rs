//! Players and cell states.
//!
//! ## Player
//!
//! The two sides of the game. `X` always moves first in a fresh game.
//!
//! ## Cell
//!
//! The state of one board square: empty, or occupied by a player.
//! There is no third "marker" value, so a cell can never hold anything
//! other than one of these three states.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First mover, drawn as a cross.
    X,
    /// Second mover, drawn as a circle.
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol used by the text rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// State of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }

    /// Symbol used by the text rendering (space for empty).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(p) => p.symbol(),
        }
    }

    /// Parse a board character. Accepts `X`/`O` in either case and
    /// space, `.` or `_` for empty.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::Occupied(Player::X)),
            'O' | 'o' => Some(Cell::Occupied(Player::O)),
            ' ' | '.' | '_' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
