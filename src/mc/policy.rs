//! Rollout policies.
//!
//! A `RolloutPolicy` picks the next move during a random playout. The
//! evaluator defaults to `UniformRollout`, which picks uniformly among
//! the empty cells.

use tracing::warn;

use crate::board::{Board, Decision};
use crate::core::{GameRng, Player, Position};

/// Policy for choosing moves during a rollout.
pub trait RolloutPolicy: Send + Sync {
    /// Choose an empty cell for `mover`, or `None` if the board is full.
    fn choose(&self, board: &Board, mover: Player, rng: &mut GameRng) -> Option<Position>;
}

/// Uniform random rollout policy.
#[derive(Clone, Debug, Default)]
pub struct UniformRollout;

impl RolloutPolicy for UniformRollout {
    fn choose(&self, board: &Board, _mover: Player, rng: &mut GameRng) -> Option<Position> {
        let empty = board.empty_cells();
        rng.choose(&empty).copied()
    }
}

/// Play the board out to a decision, starting with `starting`.
///
/// Movers alternate after every placement that leaves the game pending.
/// Each step fills one cell, so the playout ends after at most
/// `dimension²` moves.
pub fn play_out(
    board: &mut Board,
    starting: Player,
    policy: &dyn RolloutPolicy,
    rng: &mut GameRng,
) -> Decision {
    let mut mover = starting;

    while let Some(pos) = policy.choose(board, mover, rng) {
        match board.place_at(pos, mover) {
            Ok(true) => {}
            Ok(false) | Err(_) => {
                warn!(%pos, "rollout policy chose an unplayable cell, stopping playout");
                break;
            }
        }

        let decision = board.find_winner();
        if decision.is_decided() {
            return decision;
        }
        mover = mover.opponent();
    }

    board.find_winner()
}
