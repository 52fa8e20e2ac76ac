//! Turn sequencing for a human-versus-computer game.
//!
//! The controller owns the board and whose turn it is. A host loop feeds
//! it human clicks (already translated to positions) through
//! [`GameController::play_human`] and calls [`GameController::step`] once
//! per frame; `step` plays the computer's move when it is its turn.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Decision};
use crate::core::{Error, Player, Position, Result};
use crate::mc::MonteCarloEvaluator;

use super::config::GameConfig;

/// One placed mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub position: Position,
}

/// What happened to a submitted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed and the game goes on.
    Placed(Position),
    /// The cell was occupied; nothing changed.
    Ignored(Position),
    /// The mark was placed and decided the game.
    Finished(Position, Decision),
}

/// Owns one game: board, turn order and the computer player.
#[derive(Debug)]
pub struct GameController {
    config: GameConfig,
    board: Board,
    turn: Player,
    in_progress: bool,
    result: Option<Decision>,
    evaluator: MonteCarloEvaluator,
    history: Vec<MoveRecord>,
}

impl GameController {
    /// Validate the configuration and start a fresh game.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.board_size, config.reverse)?;
        let evaluator = MonteCarloEvaluator::new(config.evaluator_config());

        Ok(Self {
            config,
            board,
            turn: Player::X,
            in_progress: true,
            result: None,
            evaluator,
            history: Vec::new(),
        })
    }

    /// Reset to an empty board with X to move.
    ///
    /// The computer's RNG stream carries on, so successive games differ.
    pub fn new_game(&mut self) -> Result<()> {
        self.board = Board::new(self.config.board_size, self.config.reverse)?;
        self.turn = Player::X;
        self.in_progress = true;
        self.result = None;
        self.history.clear();
        debug!(ai = %self.config.ai_player, "new game");
        Ok(())
    }

    /// Submit the human's move.
    pub fn play_human(&mut self, pos: Position) -> Result<MoveOutcome> {
        self.ensure_turn(self.human_player())?;
        self.apply(pos, self.human_player())
    }

    /// Let the computer pick and play its move.
    pub fn play_ai(&mut self) -> Result<MoveOutcome> {
        let ai = self.ai_player();
        self.ensure_turn(ai)?;
        let pos = self.evaluator.best_move(&self.board, ai)?;
        self.apply(pos, ai)
    }

    /// One tick of the host loop: the computer moves if it is its turn.
    pub fn step(&mut self) -> Result<Option<MoveOutcome>> {
        if self.in_progress && self.turn == self.ai_player() {
            return self.play_ai().map(Some);
        }
        Ok(None)
    }

    fn ensure_turn(&self, player: Player) -> Result<()> {
        if !self.in_progress {
            return Err(Error::GameOver);
        }
        if self.turn != player {
            return Err(Error::NotYourTurn(self.turn));
        }
        Ok(())
    }

    fn apply(&mut self, pos: Position, player: Player) -> Result<MoveOutcome> {
        if !self.board.place_at(pos, player)? {
            return Ok(MoveOutcome::Ignored(pos));
        }

        self.history.push(MoveRecord {
            player,
            position: pos,
        });
        self.turn = player.opponent();

        let decision = self.board.find_winner();
        if decision.is_decided() {
            self.in_progress = false;
            self.result = Some(decision);
            info!(%decision, moves = self.history.len(), "game over");
            return Ok(MoveOutcome::Finished(pos, decision));
        }

        Ok(MoveOutcome::Placed(pos))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[must_use]
    pub fn ai_player(&self) -> Player {
        self.config.ai_player
    }

    #[must_use]
    pub fn human_player(&self) -> Player {
        self.config.human_player()
    }

    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Final decision once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<Decision> {
        self.result
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The computer player's evaluator.
    #[must_use]
    pub fn evaluator(&self) -> &MonteCarloEvaluator {
        &self.evaluator
    }
}
