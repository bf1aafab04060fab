//! Shared types and constants.
//!
//! Pure data with no dependencies, usable from the game core, the terminal
//! view, and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, `x`)
//! - **Height**: 20 rows (indexed 0-19, `y`, row 0 at the top)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `FALL_INTERVAL_MS` | 500 | Gravity step interval |
//!
//! Gravity is driven by accumulated wall-clock time, not by frame count, so
//! the frame interval only bounds input latency.
//!
//! # Examples
//!
//! ```
//! use termtris_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL[3], PieceKind::O);
//! assert_eq!(PieceKind::from_code(PieceKind::T.code()), Some(PieceKind::T));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Accumulated time after which gravity advances the active piece one row.
pub const FALL_INTERVAL_MS: u32 = 500;

/// Points awarded per cleared line.
pub const POINTS_PER_LINE: u32 = 100;

/// Default highscore file, relative to the working directory.
pub const HIGHSCORE_FILE: &str = "highscore.txt";

/// The seven tetromino kinds, in catalog order.
///
/// The kind is the color tag of a locked cell: each kind carries exactly one
/// fixed color, so no lookup by shape is ever needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Catalog order. Uniform spawning indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Fixed display color as `(r, g, b)`.
    ///
    /// - **I**: cyan
    /// - **J**: blue
    /// - **L**: orange
    /// - **O**: yellow
    /// - **S**: green
    /// - **T**: purple
    /// - **Z**: red
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 255, 255),
            PieceKind::J => (0, 0, 255),
            PieceKind::L => (255, 165, 0),
            PieceKind::O => (255, 255, 0),
            PieceKind::S => (0, 255, 0),
            PieceKind::T => (128, 0, 128),
            PieceKind::Z => (255, 0, 0),
        }
    }

    /// Small non-zero code used by snapshot grids (0 means empty).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Player intents delivered by the input layer.
///
/// Quitting is not a game action; the binary checks for it before mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (no score bonus)
    SoftDrop,
    /// Rotate piece 90° clockwise, in place
    Rotate,
    /// Start a new session (only honored after game over)
    Restart,
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(PieceKind)`: occupied, colored by the locking piece's kind
pub type Cell = Option<PieceKind>;
