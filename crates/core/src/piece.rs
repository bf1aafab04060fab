//! The active falling piece.

use crate::shape::Shape;
use crate::types::{PieceKind, BOARD_WIDTH};

/// Active falling piece: a shape matrix placed by its top-left corner.
///
/// `shape` is replaced on rotation; `kind` (and with it the color) never
/// changes for the lifetime of the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the matrix's left edge.
    pub x: i8,
    /// Row of the matrix's top edge.
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` at its spawn position: horizontally centered
    /// (`COLS / 2 - width / 2`, integer division) on row 0.
    pub fn new(kind: PieceKind) -> Self {
        let shape = Shape::for_kind(kind);
        Self {
            kind,
            shape,
            x: spawn_column(&shape),
            y: 0,
        }
    }

    /// Absolute (x, y) of each filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

fn spawn_column(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8
}
