//! Game session tests.
//!
//! These tests verify the turn protocol and state machine:
//! - Spawning only after moves that changed the grid
//! - Win/loss transitions and rejection of further moves
//! - Undo/redo, reset, and configuration changes

use std::collections::HashSet;

use slide_2048::core::{Direction, GameConfig, GameRng, Grid};
use slide_2048::session::{Game, GameStatus, HistoryError, Snapshot, TurnOutcome};

fn resume(rows: [[u32; 4]; 4], score: u64, config: GameConfig) -> Game {
    let snapshot = Snapshot {
        grid: Grid::from_rows(&rows).expect("valid grid"),
        score,
    };
    Game::resume(config, snapshot, GameRng::new(7)).expect("valid config")
}

/// Cycle through directions until the game ends or `turns` run out.
fn play_out(game: &mut Game, turns: usize) {
    for turn in 0..turns {
        if game.status().is_terminal() {
            break;
        }
        let direction = Direction::ALL[turn % 4];
        if game.play(direction) == TurnOutcome::NoMove {
            if let Some(&other) = game.available_moves().first() {
                game.play(other);
            }
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Game::new(GameConfig::default(), 1234).unwrap();
    let mut b = Game::new(GameConfig::default(), 1234).unwrap();

    play_out(&mut a, 200);
    play_out(&mut b, 200);

    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.score(), b.score());
    assert_eq!(a.status(), b.status());
}

#[test]
fn test_long_game_invariants() {
    let mut game = Game::new(GameConfig::default().with_grid_size(5), 99).unwrap();
    let mut expected_score = 0;

    for turn in 0..500 {
        if game.status().is_terminal() {
            break;
        }
        let before = game.grid().occupied_count();
        let direction = Direction::ALL[(turn * 7 + 3) % 4];

        match game.play(direction) {
            TurnOutcome::Moved { points, .. } => {
                expected_score += points;
                // merges remove tiles, the spawn adds exactly one
                assert!(game.grid().occupied_count() <= before + 1);
            }
            TurnOutcome::NoMove => assert_eq!(game.grid().occupied_count(), before),
            TurnOutcome::Rejected(_) => unreachable!("checked status above"),
        }

        let ids: HashSet<_> = game.grid().tiles().map(|t| t.id).collect();
        assert_eq!(ids.len(), game.grid().occupied_count());
        assert!(game.grid().tiles().all(|t| t.value >= 2 && t.value.is_power_of_two()));
    }

    assert_eq!(game.score(), expected_score);
    assert!(game.best_score() >= game.score());
}

#[test]
fn test_reaching_target_wins() {
    let mut game = resume(
        [[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]],
        18000,
        GameConfig::default(),
    );

    let outcome = game.play(Direction::Left);
    assert_eq!(
        outcome,
        TurnOutcome::Moved {
            points: 2048,
            status: GameStatus::Won
        }
    );
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.largest_tile(), 2048);
    assert_eq!(game.play(Direction::Right), TurnOutcome::Rejected(GameStatus::Won));
    assert!(game.summary().to_string().starts_with("2048 | Victory!"));
}

#[test]
fn test_smaller_target() {
    let config = GameConfig::default().with_winning_tile(64);
    let mut game = resume([[32, 32, 0, 0], [0; 4], [0; 4], [0; 4]], 0, config);

    assert!(matches!(
        game.play(Direction::Left),
        TurnOutcome::Moved { status: GameStatus::Won, .. }
    ));
}

#[test]
fn test_last_move_loses() {
    let mut game = resume(
        [
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 8],
            [4, 2, 16, 16],
        ],
        500,
        GameConfig::default(),
    );
    assert_eq!(game.status(), GameStatus::Playing);

    // Whatever spawns in the freed corner sits next to 32 and 8
    let outcome = game.play(Direction::Left);
    assert_eq!(
        outcome,
        TurnOutcome::Moved {
            points: 32,
            status: GameStatus::Lost
        }
    );
    assert_eq!(game.score(), 532);
    assert_eq!(game.play(Direction::Up), TurnOutcome::Rejected(GameStatus::Lost));
    assert_eq!(game.summary().status_label(), "Game Over");
}

#[test]
fn test_undo_restores_grid_and_score() {
    let mut game = resume([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 40, GameConfig::default());
    let before = game.snapshot();

    game.play(Direction::Left);
    let after = game.snapshot();
    assert_eq!(game.score(), 44);

    game.undo().unwrap();
    assert_eq!(game.snapshot(), before);
    assert!(game.can_redo());
    // best score is not rolled back
    assert_eq!(game.best_score(), 44);

    game.redo().unwrap();
    assert_eq!(game.snapshot(), after);
    assert_eq!(game.redo(), Err(HistoryError::NothingToRedo));
}

#[test]
fn test_undo_out_of_win() {
    let mut game = resume([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]], 0, GameConfig::default());
    game.play(Direction::Left);
    assert_eq!(game.status(), GameStatus::Won);

    game.undo().unwrap();
    assert_eq!(game.status(), GameStatus::Playing);

    game.redo().unwrap();
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_new_move_clears_redo() {
    let mut game = resume([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]], 0, GameConfig::default());
    game.play(Direction::Left);
    game.undo().unwrap();
    assert!(game.can_redo());

    game.play(Direction::Right);
    assert!(!game.can_redo());
}

#[test]
fn test_undo_empty_history() {
    let mut game = Game::new(GameConfig::default(), 5).unwrap();
    assert_eq!(game.undo(), Err(HistoryError::NothingToUndo));
}

#[test]
fn test_history_limit_respected() {
    let config = GameConfig::default().with_history_limit(3);
    let mut game = Game::new(config, 21).unwrap();
    play_out(&mut game, 20);

    let mut undone = 0;
    while game.undo().is_ok() {
        undone += 1;
    }
    assert_eq!(undone, 3);
}

#[test]
fn test_disabled_history() {
    let config = GameConfig::default().with_history_limit(0);
    let mut game = resume([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0, config);
    game.play(Direction::Left);
    assert!(!game.can_undo());
}

#[test]
fn test_reset_keeps_best_score() {
    let mut game = resume([[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]], 100, GameConfig::default());
    game.play(Direction::Left);
    assert_eq!(game.best_score(), 116);

    game.reset();

    assert_eq!(game.score(), 0);
    assert_eq!(game.best_score(), 116);
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.grid().occupied_count(), 2);
    assert!(!game.can_undo());
}

#[test]
fn test_set_config_resets() {
    let mut game = Game::new(GameConfig::default(), 8).unwrap();
    play_out(&mut game, 10);

    game.set_config(GameConfig::new(6, 4096).unwrap()).unwrap();

    assert_eq!(game.grid().size(), 6);
    assert_eq!(game.grid().occupied_count(), 2);
    assert_eq!(game.score(), 0);
    assert_eq!(game.config().winning_tile, 4096);
    assert!(!game.can_undo());
}

#[test]
fn test_set_config_rejects_invalid() {
    let mut game = Game::new(GameConfig::default(), 8).unwrap();
    let before = game.snapshot();

    assert!(game.set_config(GameConfig::default().with_winning_tile(3000)).is_err());
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.config(), &GameConfig::default());
}

#[test]
fn test_summary_fields() {
    let game = resume([[256, 4, 0, 0], [0; 4], [0; 4], [0; 4]], 1500, GameConfig::default());
    let summary = game.summary();

    assert_eq!(summary.status, GameStatus::Playing);
    assert_eq!(summary.largest_tile, 256);
    assert_eq!(summary.score, 1500);
    assert_eq!(
        summary.to_string(),
        "2048 | In Progress\nScore: 1,500 | Best: 1,500\nLargest Tile: 256\n4×4 Grid | Target: 2,048"
    );
}

#[test]
fn test_checkpoint_and_resume() {
    let mut game = Game::new(GameConfig::default(), 77).unwrap();
    play_out(&mut game, 15);

    let snapshot = game.snapshot();
    let rng = GameRng::from_state(&game.rng_state());
    let mut resumed = Game::resume(game.config().clone(), snapshot, rng).unwrap();

    play_out(&mut game, 15);
    play_out(&mut resumed, 15);
    assert_eq!(game.grid(), resumed.grid());
    assert_eq!(game.score(), resumed.score());
}

/// A saved position whose grid is malformed never reaches `Game::resume`.
#[test]
fn test_malformed_snapshot_is_rejected() {
    let empty_cells = r#"{"grid":{"size":4,"cells":[],"next_id":0},"score":0}"#;
    assert!(serde_json::from_str::<Snapshot>(empty_cells).is_err());

    let mut cells = vec!["null".to_string(); 16];
    cells[0] = r#"{"id":0,"value":2,"position":{"row":0,"col":0}}"#.to_string();
    let stale_next_id = format!(
        r#"{{"grid":{{"size":4,"cells":[{}],"next_id":0}},"score":0}}"#,
        cells.join(",")
    );
    assert!(serde_json::from_str::<Snapshot>(&stale_next_id).is_err());
}

/// Ids stay unique when play continues from a saved position.
#[test]
fn test_resumed_game_spawns_fresh_ids() {
    let mut game = Game::new(GameConfig::default(), 31).unwrap();
    play_out(&mut game, 10);

    let json = serde_json::to_string(&game.snapshot()).unwrap();
    let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
    let mut resumed =
        Game::resume(game.config().clone(), snapshot, GameRng::from_state(&game.rng_state())).unwrap();

    for _ in 0..20 {
        play_out(&mut resumed, 4);
        let ids: Vec<_> = resumed.grid().tiles().map(|t| t.id).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.iter().all(|&id| id < resumed.grid().next_id()));
    }
}
