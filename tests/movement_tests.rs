//! Placement and rotation against the board.

use termtris::core::{can_place, rotate, try_move, Board, Piece, Shape};
use termtris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_every_spawn_fits_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        assert!(can_place(&Piece::new(kind), &board, 0, 0), "{:?}", kind);
    }
}

#[test]
fn test_can_place_rejects_side_walls() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        piece.x = 0;
        assert!(!can_place(&piece, &board, -1, 0), "{:?} left", kind);

        piece.x = BOARD_WIDTH as i8 - piece.shape.width() as i8;
        assert!(can_place(&piece, &board, 0, 0));
        assert!(!can_place(&piece, &board, 1, 0), "{:?} right", kind);
    }
}

#[test]
fn test_can_place_rejects_below_floor() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        piece.y = BOARD_HEIGHT as i8 - piece.shape.height() as i8;
        assert!(can_place(&piece, &board, 0, 0));
        assert!(!can_place(&piece, &board, 0, 1), "{:?}", kind);
    }
}

#[test]
fn test_can_place_rejects_occupied_cells() {
    let mut board = Board::new();
    board.set(5, 3, Some(PieceKind::Z));

    let mut piece = Piece::new(PieceKind::O); // cols 4-5
    piece.y = 1; // rows 1-2
    assert!(can_place(&piece, &board, 0, 0));
    assert!(!can_place(&piece, &board, 0, 1));
}

#[test]
fn test_empty_matrix_cells_never_collide() {
    let mut board = Board::new();
    // T at (3, 2) fills (4, 2) and (3..=5, 3); (3, 2) and (5, 2) are holes.
    let mut t = Piece::new(PieceKind::T);
    t.x = 3;
    t.y = 2;
    board.set(3, 2, Some(PieceKind::I));
    board.set(5, 2, Some(PieceKind::I));
    assert!(can_place(&t, &board, 0, 0));

    board.set(4, 2, Some(PieceKind::I));
    assert!(!can_place(&t, &board, 0, 0));
}

#[test]
fn test_cells_above_top_skip_occupancy() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        if x != 0 {
            board.set(x, 0, Some(PieceKind::I));
        }
    }

    // Vertical I in column 0 with three cells above the top.
    let mut piece = Piece::new(PieceKind::I);
    piece.shape = piece.shape.rotated_cw();
    piece.x = 0;
    piece.y = -3;
    assert!(can_place(&piece, &board, 0, 0));

    // Same, but with the visible cell landing on a block.
    piece.x = 1;
    assert!(!can_place(&piece, &board, 0, 0));

    // Walls still apply above the top.
    piece.x = -1;
    assert!(!can_place(&piece, &board, 0, 0));
}

#[test]
fn test_four_rotations_restore_shape() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        piece.y = 5;
        let original = piece;
        for _ in 0..4 {
            assert!(rotate(&mut piece, &board), "{:?}", kind);
        }
        assert_eq!(piece, original);
    }
}

#[test]
fn test_rotation_keeps_top_left_fixed() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::L);
    piece.y = 4;
    assert!(rotate(&mut piece, &board));
    assert_eq!((piece.x, piece.y), (4, 4));
    assert_eq!(piece.shape, Shape::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]));
}

#[test]
fn test_obstructed_rotation_is_noop() {
    let mut board = Board::new();
    let mut piece = Piece::new(PieceKind::I);
    piece.y = 10;
    // The vertical I would occupy (3, 10..=13).
    board.set(3, 12, Some(PieceKind::O));

    let before = piece;
    assert!(!rotate(&mut piece, &board));
    assert_eq!(piece, before);
}

#[test]
fn test_rotation_at_floor_is_noop() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::I);
    piece.y = BOARD_HEIGHT as i8 - 1;
    let before = piece;
    assert!(!rotate(&mut piece, &board));
    assert_eq!(piece, before);
}

#[test]
fn test_try_move_only_applies_valid_moves() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::O);
    piece.x = BOARD_WIDTH as i8 - 2;

    assert!(!try_move(&mut piece, &board, 1, 0));
    assert_eq!(piece.x, BOARD_WIDTH as i8 - 2);
    assert!(try_move(&mut piece, &board, -1, 0));
    assert_eq!(piece.x, BOARD_WIDTH as i8 - 3);
}
