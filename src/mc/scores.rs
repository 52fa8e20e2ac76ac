//! Per-evaluation score grid.

use smallvec::SmallVec;

use crate::board::{Board, Decision};
use crate::core::{Error, Player, Position, Result};

use super::config::EvaluatorConfig;

/// Accumulated rollout scores, one `f64` per cell.
///
/// Created zeroed for each evaluation and handed back with the result;
/// never reused across evaluations.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreGrid {
    dimension: usize,
    values: Vec<f64>,
}

impl ScoreGrid {
    /// A zeroed grid for a board of the given dimension.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            values: vec![0.0; dimension * dimension],
        }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn index(&self, pos: Position) -> Result<usize> {
        if pos.row >= self.dimension || pos.col >= self.dimension {
            return Err(Error::OutOfBounds {
                row: pos.row,
                col: pos.col,
                dimension: self.dimension,
            });
        }
        Ok(pos.row * self.dimension + pos.col)
    }

    /// Score at a position. Fails with [`Error::OutOfBounds`] off the grid.
    pub fn get(&self, pos: Position) -> Result<f64> {
        Ok(self.values[self.index(pos)?])
    }

    pub fn add(&mut self, pos: Position, score: f64) -> Result<()> {
        let idx = self.index(pos)?;
        self.values[idx] += score;
        Ok(())
    }

    /// Add one finished rollout.
    ///
    /// Every cell of the finished board contributes at its own coordinate,
    /// whether or not it was empty before the rollout started:
    /// - opponent of `player` won: `player` cells `+machine_score`,
    ///   opponent cells `-human_score`
    /// - `player` won: `player` cells `-machine_score`, opponent cells
    ///   `+human_score`
    /// - tie (or undecided): nothing
    ///
    /// Fails with [`Error::OutOfBounds`] if `finished` is larger than the grid.
    pub fn record_rollout(
        &mut self,
        finished: &Board,
        decision: Decision,
        player: Player,
        config: &EvaluatorConfig,
    ) -> Result<()> {
        let (own, other) = match decision {
            Decision::Winner(winner) if winner == player => {
                (-config.machine_score, config.human_score)
            }
            Decision::Winner(_) => (config.machine_score, -config.human_score),
            Decision::Tie | Decision::Pending => return Ok(()),
        };

        for (pos, cell) in finished.cells() {
            let score = match cell.player() {
                Some(p) if p == player => own,
                Some(_) => other,
                None => 0.0,
            };
            self.add(pos, score)?;
        }
        Ok(())
    }

    /// Highest score among `positions`, `None` when there are none.
    pub fn max_over(&self, positions: &[Position]) -> Result<Option<f64>> {
        let mut best: Option<f64> = None;
        for &pos in positions {
            let score = self.get(pos)?;
            if best.map_or(true, |b| score > b) {
                best = Some(score);
            }
        }
        Ok(best)
    }

    /// All of `positions` whose score equals the maximum, in input order.
    pub fn best_among(&self, positions: &[Position]) -> Result<SmallVec<[Position; 16]>> {
        let Some(max) = self.max_over(positions)? else {
            return Ok(SmallVec::new());
        };

        let mut best = SmallVec::new();
        for &pos in positions {
            if self.get(pos)? == max {
                best.push(pos);
            }
        }
        Ok(best)
    }

    /// Scores as a row-major grid.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.dimension.max(1))
            .map(<[f64]>::to_vec)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EvaluatorConfig {
        EvaluatorConfig::default()
            .with_machine_score(2.0)
            .with_human_score(3.0)
    }

    #[test]
    fn test_new_is_zeroed() {
        let grid = ScoreGrid::new(3);
        assert_eq!(grid.rows(), vec![vec![0.0; 3]; 3]);
    }

    #[test]
    fn test_opponent_win_rewards_player_cells() {
        // O completed the middle column; evaluating for X.
        let board = Board::parse(&["XO_", "XO_", "_OX"], false).unwrap();
        let mut grid = ScoreGrid::new(3);

        grid.record_rollout(&board, board.find_winner(), Player::X, &config()).unwrap();

        assert_eq!(
            grid.rows(),
            vec![
                vec![2.0, -3.0, 0.0],
                vec![2.0, -3.0, 0.0],
                vec![0.0, -3.0, 2.0],
            ]
        );
    }

    #[test]
    fn test_own_win_penalizes_player_cells() {
        let board = Board::parse(&["XXX", "OO_", "___"], false).unwrap();
        let mut grid = ScoreGrid::new(3);

        grid.record_rollout(&board, Decision::Winner(Player::X), Player::X, &config()).unwrap();

        assert_eq!(
            grid.rows(),
            vec![
                vec![-2.0, -2.0, -2.0],
                vec![3.0, 3.0, 0.0],
                vec![0.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_tie_scores_nothing() {
        let board = Board::parse(&["XOX", "XOO", "OXX"], false).unwrap();
        let mut grid = ScoreGrid::new(3);

        grid.record_rollout(&board, Decision::Tie, Player::O, &config()).unwrap();

        assert_eq!(grid, ScoreGrid::new(3));
    }

    #[test]
    fn test_accumulates() {
        let board = Board::parse(&["OOO", "X_X", "___"], false).unwrap();
        let mut grid = ScoreGrid::new(3);

        for _ in 0..3 {
            grid.record_rollout(&board, board.find_winner(), Player::O, &config()).unwrap();
        }

        assert_eq!(grid.get(Position::new(0, 0)).unwrap(), -6.0);
        assert_eq!(grid.get(Position::new(1, 0)).unwrap(), 9.0);
        assert_eq!(grid.get(Position::new(1, 1)).unwrap(), 0.0);
    }

    #[test]
    fn test_best_among_keeps_ties() {
        let mut grid = ScoreGrid::new(2);
        grid.add(Position::new(0, 0), 1.0).unwrap();
        grid.add(Position::new(0, 1), 4.0).unwrap();
        grid.add(Position::new(1, 0), 4.0).unwrap();
        grid.add(Position::new(1, 1), 9.0).unwrap();

        // (1, 1) is not a candidate, so its higher score is ignored.
        let candidates = [Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)];
        assert_eq!(grid.max_over(&candidates).unwrap(), Some(4.0));
        assert_eq!(
            grid.best_among(&candidates).unwrap().as_slice(),
            &[Position::new(0, 1), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_best_among_negative_scores() {
        let mut grid = ScoreGrid::new(2);
        grid.add(Position::new(0, 0), -5.0).unwrap();
        grid.add(Position::new(1, 1), -2.0).unwrap();

        let candidates = [Position::new(0, 0), Position::new(1, 1)];
        assert_eq!(grid.best_among(&candidates).unwrap().as_slice(), &[Position::new(1, 1)]);
    }

    #[test]
    fn test_best_among_empty() {
        let grid = ScoreGrid::new(3);
        assert!(grid.best_among(&[]).unwrap().is_empty());
        assert_eq!(grid.max_over(&[]).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut grid = ScoreGrid::new(3);

        assert_eq!(
            grid.add(Position::new(0, 3), 7.0),
            Err(Error::OutOfBounds { row: 0, col: 3, dimension: 3 })
        );
        assert_eq!(grid.get(Position::new(1, 0)).unwrap(), 0.0);
        assert!(matches!(grid.get(Position::new(0, 4)), Err(Error::OutOfBounds { .. })));
        assert!(matches!(grid.get(Position::new(3, 0)), Err(Error::OutOfBounds { .. })));
        assert!(grid.best_among(&[Position::new(0, 0), Position::new(2, 3)]).is_err());
        assert_eq!(grid, ScoreGrid::new(3));
    }

    #[test]
    fn test_larger_board_rejected() {
        let board = Board::parse(&["XXXX", "OOO_", "____", "____"], false).unwrap();
        let mut grid = ScoreGrid::new(3);

        let result = grid.record_rollout(&board, board.find_winner(), Player::X, &config());

        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
    }
}
