//! Session lifecycle through the public API.

use std::fs;

use termtris::core::{
    Board, GameSession, HighscoreStore, LockEvent, MemoryHighscore, PieceFactory,
};
use termtris::store::FileHighscore;
use termtris::types::{
    GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS, POINTS_PER_LINE,
};

/// Let gravity run until the session ends, returning every lock event.
fn play_until_game_over<S: HighscoreStore>(s: &mut GameSession<S>) -> Vec<LockEvent> {
    let mut events = Vec::new();
    for _ in 0..100_000 {
        s.tick(FALL_INTERVAL_MS + 1).unwrap();
        if let Some(event) = s.take_last_event() {
            events.push(event);
            if event.game_over {
                return events;
            }
        }
    }
    panic!("session never ended");
}

#[test]
fn test_game_lifecycle() {
    let mut s = GameSession::new(PieceFactory::new(12345), MemoryHighscore::default());
    assert!(!s.game_over());
    assert!(s.snapshot().active.is_some());

    let events = play_until_game_over(&mut s);
    assert!(s.game_over());
    assert!(s.snapshot().game_over);
    assert!(s.snapshot().active.is_none());

    // Only the last lock ends the session.
    let (last, rest) = events.split_last().unwrap();
    assert!(last.game_over);
    assert!(rest.iter().all(|e| !e.game_over));
}

#[test]
fn test_score_is_sum_of_lock_points() {
    let mut s = GameSession::new(PieceFactory::new(777), MemoryHighscore::default());
    let events = play_until_game_over(&mut s);

    let total: u32 = events.iter().map(|e| e.points).sum();
    assert_eq!(s.score(), total);
    for e in &events {
        assert_eq!(e.points, e.lines_cleared * POINTS_PER_LINE);
    }
}

#[test]
fn test_player_moves_while_running() {
    let mut s = GameSession::new(PieceFactory::new(5), MemoryHighscore::default());
    let start = *s.active();

    assert!(s.apply_action(GameAction::SoftDrop));
    assert_eq!(s.active().y, start.y + 1);

    let mut lefts = 0;
    while s.apply_action(GameAction::MoveLeft) {
        lefts += 1;
    }
    assert_eq!(s.active().x, 0);
    assert_eq!(lefts, start.x);

    while s.apply_action(GameAction::MoveRight) {}
    assert_eq!(
        s.active().x + s.active().shape.width() as i8,
        BOARD_WIDTH as i8
    );
}

#[test]
fn test_restart_after_game_over() {
    let mut s = GameSession::new(PieceFactory::new(3), MemoryHighscore::new(10));
    play_until_game_over(&mut s);

    assert!(!s.apply_action(GameAction::MoveLeft));
    assert!(s.apply_action(GameAction::Restart));

    assert!(!s.game_over());
    assert_eq!(s.score(), 0);
    assert_eq!(s.episode_id(), 1);
    assert!(s.board().cells().iter().all(|c| c.is_none()));
    assert!(s.highscore() >= 10);
}

/// Fill the bottom row except under the lowest cells of the first piece
/// `seed` spawns, so dropping that piece straight down clears the row.
fn board_cleared_by_first_piece(seed: u64) -> Board {
    let piece = PieceFactory::new(seed).spawn();
    let bottom = piece.cells().map(|(_, y)| y).max().unwrap();
    let holes: Vec<i8> = piece
        .cells()
        .filter(|&(_, y)| y == bottom)
        .map(|(x, _)| x)
        .collect();

    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        if !holes.contains(&x) {
            board.set(x, BOARD_HEIGHT as i8 - 1, Some(PieceKind::Z));
        }
    }
    board
}

#[test]
fn test_beaten_highscore_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    fs::write(&path, "50").unwrap();

    let seed = 12345;
    let board = board_cleared_by_first_piece(seed);
    let mut s = GameSession::from_board(PieceFactory::new(seed), FileHighscore::new(&path), board);
    assert_eq!(s.highscore(), 50);

    let events = play_until_game_over(&mut s);
    assert_eq!(events[0].lines_cleared, 1);
    assert_eq!(events[0].points, POINTS_PER_LINE);
    assert!(s.score() >= POINTS_PER_LINE);

    assert_eq!(s.highscore(), s.score());
    assert_eq!(fs::read_to_string(&path).unwrap(), s.score().to_string());
    assert_eq!(FileHighscore::new(&path).load(), s.score());
}

#[test]
fn test_unbeaten_highscore_file_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    fs::write(&path, "100000").unwrap();

    let seed = 12345;
    let board = board_cleared_by_first_piece(seed);
    let mut s = GameSession::from_board(PieceFactory::new(seed), FileHighscore::new(&path), board);

    play_until_game_over(&mut s);
    assert!(s.score() >= POINTS_PER_LINE);
    assert!(s.score() < 100000);
    assert_eq!(s.highscore(), 100000);
    assert_eq!(fs::read_to_string(&path).unwrap(), "100000");
}

#[test]
fn test_corrupt_highscore_file_starts_at_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    fs::write(&path, "garbage").unwrap();

    let s = GameSession::new(PieceFactory::new(1), FileHighscore::new(&path));
    assert_eq!(s.highscore(), 0);
    assert!(!s.game_over());
}
