//! Game session - the running/game-over state machine
//!
//! Ties the board, the active piece, the factory, and scoring together.
//! Gravity is fed wall-clock milliseconds through [`GameSession::tick`];
//! player intents arrive through [`GameSession::apply_action`].
//!
//! When gravity finds the active piece resting, the lock sequence runs:
//! lock into the board, clear full rows, score `100 × lines`, spawn the next
//! piece, and end the session if that piece does not fit where it spawned.

use anyhow::Result;
use tracing::{debug, info};

use crate::board::Board;
use crate::factory::PieceFactory;
use crate::highscore::HighscoreStore;
use crate::movement::{can_place, rotate, try_move};
use crate::piece::Piece;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, FALL_INTERVAL_MS, POINTS_PER_LINE};

/// Outcome of one lock sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    /// The piece spawned after this lock did not fit.
    pub game_over: bool,
}

pub struct GameSession<S: HighscoreStore> {
    board: Board,
    active: Piece,
    factory: PieceFactory,
    store: S,
    score: u32,
    highscore: u32,
    /// Milliseconds accumulated toward the next gravity step.
    fall_timer_ms: u32,
    game_over: bool,
    /// Increments on every restart.
    episode_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl<S: HighscoreStore> GameSession<S> {
    /// Start a running session with an empty board and a fresh piece.
    ///
    /// The persisted highscore is read once here.
    pub fn new(factory: PieceFactory, store: S) -> Self {
        Self::from_board(factory, store, Board::new())
    }

    /// Start on a prepared board (puzzles, replays, tests).
    ///
    /// If the first piece does not fit where it spawns, the session starts
    /// over.
    pub fn from_board(mut factory: PieceFactory, store: S, board: Board) -> Self {
        let highscore = store.load();
        let active = factory.spawn();
        let game_over = !can_place(&active, &board, 0, 0);
        info!(seed = factory.seed(), highscore, game_over, "session started");

        Self {
            board,
            active,
            factory,
            store,
            score: 0,
            highscore,
            fall_timer_ms: 0,
            game_over,
            episode_id: 0,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece. Frozen once the session is over.
    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = (!self.game_over).then(|| ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.highscore = self.highscore;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance gravity by `elapsed_ms` of wall-clock time.
    ///
    /// Returns whether the active piece moved or locked. Errors only when a
    /// new highscore cannot be persisted.
    pub fn tick(&mut self, elapsed_ms: u32) -> Result<bool> {
        if self.game_over {
            return Ok(false);
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms <= FALL_INTERVAL_MS {
            return Ok(false);
        }
        self.fall_timer_ms = 0;

        if try_move(&mut self.active, &self.board, 0, 1) {
            return Ok(true);
        }

        self.lock_active()?;
        Ok(true)
    }

    /// Apply a player intent. Returns whether the session changed.
    ///
    /// Moves that do not fit are ignored. While running, `Restart` is
    /// ignored; once over, only `Restart` is honored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            if action == GameAction::Restart {
                self.restart();
                return true;
            }
            return false;
        }

        match action {
            GameAction::MoveLeft => try_move(&mut self.active, &self.board, -1, 0),
            GameAction::MoveRight => try_move(&mut self.active, &self.board, 1, 0),
            GameAction::SoftDrop => try_move(&mut self.active, &self.board, 0, 1),
            GameAction::Rotate => rotate(&mut self.active, &self.board),
            GameAction::Restart => false,
        }
    }

    fn lock_active(&mut self) -> Result<()> {
        let piece = self.active;
        let written = self.board.lock_cells(piece.cells(), piece.kind);
        debug_assert!(written, "locked piece had cells outside the board");

        let lines = self.board.clear_full_rows() as u32;
        let points = lines * POINTS_PER_LINE;
        self.score = self.score.saturating_add(points);
        if lines > 0 {
            debug!(lines, points, score = self.score, "lines cleared");
        }

        self.active = self.factory.spawn();
        let game_over = !can_place(&self.active, &self.board, 0, 0);
        self.last_event = Some(LockEvent {
            lines_cleared: lines,
            points,
            game_over,
        });

        if game_over {
            self.finish()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.game_over = true;
        info!(score = self.score, episode = self.episode_id, "game over");

        if self.score > self.highscore {
            self.highscore = self.score;
            self.store.save(self.highscore)?;
            info!(highscore = self.highscore, "new highscore saved");
        }
        Ok(())
    }

    fn restart(&mut self) {
        self.board = Board::new();
        self.active = self.factory.spawn();
        self.score = 0;
        self.fall_timer_ms = 0;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        info!(episode = self.episode_id, "session restarted");
    }
}
