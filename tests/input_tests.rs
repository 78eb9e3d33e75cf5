//! Keyboard and swipe input mapped to game actions

use classic_tetris::core::GameState;
use classic_tetris::input::{handle_key_event, CellMetrics, SwipeTracker};
use classic_tetris::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind, KeyModifiers};

fn drag(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_arrow_keys_drive_the_session() {
    let mut game = GameState::new(4);
    game.start();
    let start = game.active().unwrap();

    let action = handle_key_event(KeyEvent::from(KeyCode::Right)).unwrap();
    assert!(game.apply_action(action));
    assert_eq!(game.active().unwrap().col, start.col + 1);

    let action = handle_key_event(KeyEvent::from(KeyCode::Down)).unwrap();
    assert!(game.apply_action(action));
    assert_eq!(game.active().unwrap().row, start.row + 1);
}

#[test]
fn test_long_drag_fires_repeatedly() {
    let metrics = CellMetrics::default();
    let mut swipe = SwipeTracker::new();

    swipe.handle_mouse(drag(MouseEventKind::Down(MouseButton::Left), 20, 10), metrics);
    let fired: Vec<_> = (22..26)
        .filter_map(|col| {
            swipe.handle_mouse(drag(MouseEventKind::Drag(MouseButton::Left), col, 10), metrics)
        })
        .collect();

    assert_eq!(fired, vec![GameAction::MoveRight; 4]);
}

#[test]
fn test_upward_swipe_rotates() {
    let metrics = CellMetrics::new(10, 20);
    let mut swipe = SwipeTracker::new();

    swipe.handle_mouse(drag(MouseEventKind::Down(MouseButton::Left), 5, 5), metrics);
    assert_eq!(
        swipe.handle_mouse(drag(MouseEventKind::Drag(MouseButton::Left), 5, 4), metrics),
        Some(GameAction::Rotate)
    );
}
