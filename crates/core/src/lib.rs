//! Core game logic - pure, deterministic given a seed, and testable
//!
//! This crate holds the game rules and the session state machine. It knows
//! nothing about terminals, key codes, or files; persistence is reached only
//! through the [`HighscoreStore`] trait.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision test and line clearing
//! - [`shape`]: tetromino matrices and the clockwise rotation transform
//! - [`piece`]: the active falling piece and its spawn position
//! - [`factory`]: uniform random piece selection
//! - [`movement`]: move and rotate validation against the board
//! - [`session`]: gravity, locking, scoring, game over, restart
//! - [`highscore`]: persistence seam for the highscore
//! - [`snapshot`]: plain-data view of a session for rendering
//!
//! # Game Rules
//!
//! - **Randomizer**: each spawn picks uniformly among the 7 kinds
//! - **Rotation**: 90° clockwise in place, no wall kicks
//! - **Gravity**: one row every 500ms of accumulated wall-clock time
//! - **Locking**: immediate, when gravity cannot move the piece down
//! - **Scoring**: 100 points per cleared line, nothing else
//!
//! # Example
//!
//! ```
//! use termtris_core::{GameSession, MemoryHighscore, PieceFactory};
//! use termtris_types::GameAction;
//!
//! let mut game = GameSession::new(PieceFactory::new(12345), MemoryHighscore::default());
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick(16).unwrap();
//!
//! assert_eq!(game.score(), 0);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod factory;
pub mod highscore;
pub mod movement;
pub mod piece;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use termtris_types as types;

pub use board::Board;
pub use factory::PieceFactory;
pub use highscore::{HighscoreStore, MemoryHighscore};
pub use movement::{can_place, rotate, try_move};
pub use piece::Piece;
pub use session::{GameSession, LockEvent};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
