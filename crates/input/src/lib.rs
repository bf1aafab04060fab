//! Terminal input.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Each key
//! press yields at most one intent; there is no auto-repeat of its own.

pub mod map;

pub use termtris_types as types;

pub use map::{handle_key_event, should_quit};
