//! Movement and rotation against the board.
//!
//! Both operations are local: they never lock, clear, or score. An illegal
//! move or rotation is rejected silently by returning `false`.

use crate::board::Board;
use crate::piece::Piece;

/// Whether `piece`, shifted by (`dx`, `dy`), fits on `board`.
///
/// Rejects any filled cell that lands outside the side walls, below the
/// floor, or on an occupied cell. Cells above the top row only check the
/// walls.
pub fn can_place(piece: &Piece, board: &Board, dx: i8, dy: i8) -> bool {
    piece
        .cells()
        .all(|(x, y)| !board.is_occupied(x + dx, y + dy))
}

/// Shift the piece if the destination fits. Returns whether it moved.
pub fn try_move(piece: &mut Piece, board: &Board, dx: i8, dy: i8) -> bool {
    if !can_place(piece, board, dx, dy) {
        return false;
    }
    piece.x += dx;
    piece.y += dy;
    true
}

/// Rotate 90° clockwise in place, keeping the top-left corner fixed.
///
/// No wall kicks: if the rotated matrix does not fit exactly where it is,
/// the piece is left unchanged. Returns whether the rotation applied.
pub fn rotate(piece: &mut Piece, board: &Board) -> bool {
    let candidate = Piece {
        shape: piece.shape.rotated_cw(),
        ..*piece
    };
    if !can_place(&candidate, board, 0, 0) {
        return false;
    }
    *piece = candidate;
    true
}
