//! Swipe recognition for pointer drags.
//!
//! A gesture starts on press, fires on every move whose displacement from the
//! start point exceeds the threshold along its dominant axis, and ends on
//! release. The start point is not moved while the gesture is live, so a long
//! drag keeps firing on each move event.
//!
//! Terminals report pointer positions in cells, so [`CellMetrics`] converts
//! them to approximate pixels before thresholding.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{GameAction, SWIPE_THRESHOLD_PX};

/// Approximate size of one terminal cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub px_w: u16,
    pub px_h: u16,
}

impl CellMetrics {
    pub fn new(px_w: u16, px_h: u16) -> Self {
        Self { px_w, px_h }
    }

    /// Pixel position of a cell's top-left corner.
    pub fn to_px(&self, column: u16, row: u16) -> (i32, i32) {
        (
            column as i32 * self.px_w as i32,
            row as i32 * self.px_h as i32,
        )
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self { px_w: 8, px_h: 16 }
    }
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
    threshold_px: i32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD_PX)
    }

    pub fn with_threshold(threshold_px: i32) -> Self {
        Self {
            start: None,
            threshold_px,
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    pub fn begin(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    /// Classify the displacement from the gesture start.
    pub fn moved(&self, x: i32, y: i32) -> Option<GameAction> {
        let (sx, sy) = self.start?;
        let dx = x - sx;
        let dy = y - sy;
        let t = self.threshold_px;

        if dx.abs() > dy.abs() {
            if dx > t {
                Some(GameAction::MoveRight)
            } else if dx < -t {
                Some(GameAction::MoveLeft)
            } else {
                None
            }
        } else if dy > t {
            Some(GameAction::SoftDrop)
        } else if dy < -t {
            Some(GameAction::Rotate)
        } else {
            None
        }
    }

    pub fn end(&mut self) {
        self.start = None;
    }

    /// Feed a terminal mouse event (left button only).
    pub fn handle_mouse(&mut self, event: MouseEvent, metrics: CellMetrics) -> Option<GameAction> {
        let (x, y) = metrics.to_px(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.begin(x, y);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => self.moved(x, y),
            MouseEventKind::Up(MouseButton::Left) => {
                self.end();
                None
            }
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
