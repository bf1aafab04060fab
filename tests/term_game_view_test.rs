use termtris::core::{
    ActiveSnapshot, GameSession, GameSnapshot, MemoryHighscore, Piece, PieceFactory,
};
use termtris::term::{FrameBuffer, GameView, Rgb, Viewport};
use termtris::types::PieceKind;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // 10*2 by 20*1 board plus border => 22x22
    let fb = view.render(&GameSnapshot::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_board_on_large_viewports() {
    let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(42, 30));
    // start = ((42 - 22) / 2, (30 - 22) / 2)
    assert_eq!(fb.get(10, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_renders_locked_cell_in_kind_color() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = PieceKind::Z.code();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    for x in [1, 2] {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(255, 0, 0));
    }
}

#[test]
fn term_view_draws_active_piece_only_in_view() {
    let mut piece = Piece::new(PieceKind::I);
    piece.shape = piece.shape.rotated_cw();
    piece.x = 9;
    piece.y = -2; // two rows above the top, two visible

    let mut snap = GameSnapshot::default();
    snap.active = Some(ActiveSnapshot::from(piece));
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Column 9 => screen x 19..=20, clear of the score labels.
    let cyan = Rgb::from(PieceKind::I.color());
    let visible: Vec<u16> = (1..=20)
        .filter(|&y| fb.get(19, y).unwrap().style.fg == cyan)
        .collect();
    assert_eq!(visible, vec![1, 2]);
    assert_eq!(fb.get(20, 1).unwrap().ch, '█');
}

#[test]
fn term_view_shows_scores() {
    let mut snap = GameSnapshot::default();
    snap.score = 1200;
    snap.highscore = 4500;

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(40, 24)));
    assert!(text.contains("Score: 1200"));
    assert!(text.contains("High Score: 4500"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = GameSnapshot::default();
    snap.game_over = true;

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(40, 24)));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Press R to Restart"));
}

#[test]
fn term_view_renders_live_session() {
    let session = GameSession::new(PieceFactory::new(1), MemoryHighscore::new(7));
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(22, 22));
    let text = screen_text(&fb);
    assert!(text.contains("High Score: 7"));
}
