use classic_tetris::core::GameState;
use classic_tetris::term::{piece_rgb, AnchorY, FrameBuffer, GameView, Viewport};
use classic_tetris::types::{GameAction, PieceKind};

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1);
    let snap = state.snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the board is 20x20, plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = PieceKind::I.code();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let y0 = 1 + 19;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(1, y0).unwrap().style.fg, piece_rgb(PieceKind::I));
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_follows_active_piece() {
    let mut state = GameState::new(1);
    state.start();
    // Bring the piece fully into view.
    for _ in 0..3 {
        state.apply_action(GameAction::SoftDrop);
    }
    let snap = state.snapshot();
    let active = snap.active.unwrap();

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 22));

    for (row, col) in active.cells() {
        let cell = fb.get(1 + col as u16 * 2, 1 + row as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_rgb(active.kind));
    }
}

#[test]
fn term_view_game_over_overlay() {
    let mut state = GameState::new(2);
    state.start();
    while !state.game_over() {
        state.apply_action(GameAction::SoftDrop);
    }
    let mut snap = state.snapshot();
    snap.high_score = 4321;

    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();

    assert!(text.iter().any(|row| row.contains("GAME OVER!")));
    assert!(text.iter().any(|row| row.contains("High Score: 4321")));
    assert!(text.iter().any(|row| row.contains("HIGH SCORE")));
}

#[test]
fn term_view_render_into_resizes_buffer() {
    let snap = GameState::new(1).snapshot();
    let mut fb = FrameBuffer::new(1, 1);

    GameView::default().render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
}
