//! Game controller and self-play integration tests.

use tic_tac_mc::board::Decision;
use tic_tac_mc::core::{Error, Player, Position};
use tic_tac_mc::game::{
    GameConfig, GameController, MoveOutcome, SelfPlayConfig, SelfPlayWorker,
};

// =============================================================================
// Human vs Computer Tests
// =============================================================================

/// Drive a game to its end, the human always taking the last empty cell.
fn play_to_end(game: &mut GameController) {
    while game.in_progress() {
        if game.turn() == game.human_player() {
            let empty = game.board().empty_cells();
            let pos = *empty.last().unwrap();
            game.play_human(pos).unwrap();
        } else {
            game.step().unwrap();
        }
    }
}

#[test]
fn test_computer_opens_as_x() {
    let mut game = GameController::new(GameConfig::default()).unwrap();

    assert_eq!(game.play_human(Position::new(0, 0)), Err(Error::NotYourTurn(Player::X)));
    assert!(game.step().unwrap().is_some());
    assert_eq!(game.turn(), Player::O);
    assert!(game.step().unwrap().is_none());
}

#[test]
fn test_turns_alternate_in_history() {
    let mut game = GameController::new(GameConfig::default().with_ai_player(Player::O)).unwrap();
    play_to_end(&mut game);

    let history = game.history();
    assert_eq!(history[0].player, Player::X);
    for pair in history.windows(2) {
        assert_eq!(pair[1].player, pair[0].player.opponent());
    }
    assert_eq!(history.len(), 9 - game.board().empty_count());
}

#[test]
fn test_result_banner() {
    let mut game = GameController::new(GameConfig::default().with_seed(3)).unwrap();
    play_to_end(&mut game);

    let banner = game.result().and_then(Decision::banner).unwrap();
    assert!(["X wins!", "O wins!", "It's a tie!"].contains(&banner));
}

#[test]
fn test_misere_single_cell_game() {
    let config = GameConfig::default().with_board_size(1).with_reverse(true);
    let mut game = GameController::new(config).unwrap();

    let outcome = game.step().unwrap();

    assert_eq!(
        outcome,
        Some(MoveOutcome::Finished(Position::new(0, 0), Decision::Winner(Player::O)))
    );
    assert_eq!(game.result().and_then(Decision::banner), Some("O wins!"));
}

#[test]
fn test_new_game_after_finish() {
    let mut game = GameController::new(GameConfig::default()).unwrap();
    play_to_end(&mut game);
    assert_eq!(game.step().unwrap(), None);

    game.new_game().unwrap();

    assert!(game.in_progress());
    assert_eq!(game.board().empty_count(), 9);
    assert!(game.step().unwrap().is_some());
}

#[test]
fn test_larger_board_game() {
    let config = GameConfig::default()
        .with_board_size(4)
        .with_trials(5)
        .with_ai_player(Player::O);
    let mut game = GameController::new(config).unwrap();
    play_to_end(&mut game);

    assert!(game.result().unwrap().is_decided());
    assert_eq!(game.result().unwrap(), game.board().find_winner());
}

// =============================================================================
// Self-Play Tests
// =============================================================================

#[test]
fn test_self_play_games_are_complete() {
    let worker = SelfPlayWorker::new(SelfPlayConfig::default().with_trials(10, 10));
    let (records, summary) = worker.play_games(5).unwrap();

    assert_eq!(summary.games(), 5);
    for record in &records {
        assert!(record.result.is_decided());
        assert_eq!(record.result, record.final_board.find_winner());
    }
}

#[test]
fn test_self_play_seeds_are_consecutive() {
    let worker = SelfPlayWorker::new(SelfPlayConfig::default().with_seed_offset(100));
    let (records, _) = worker.play_games(3).unwrap();

    let seeds: Vec<u64> = records.iter().map(|r| r.seed).collect();
    assert_eq!(seeds, vec![100, 101, 102]);
}

#[test]
fn test_self_play_record_serializes() {
    let worker = SelfPlayWorker::new(SelfPlayConfig::default().with_trials(3, 3));
    let record = worker.play_game(1).unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let restored: tic_tac_mc::game::MatchRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.moves, record.moves);
    assert_eq!(restored.result, record.result);
    assert_eq!(restored.final_board, record.final_board);
}
