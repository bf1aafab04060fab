//! Terminal game renderer.
//!
//! Renders a [`core::GameSnapshot`] into a simple framebuffer, then flushes
//! the framebuffer to the terminal through crossterm. No widget library.
//!
//! - [`game_view`] is pure: snapshot in, framebuffer out
//! - [`renderer`] owns the terminal and does the I/O

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use termtris_core as core;
pub use termtris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
