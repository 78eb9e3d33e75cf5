//! Input module (engine-facing).
//!
//! Translates raw terminal events into the four [`crate::types::GameAction`]s a
//! session understands. Keys are mapped one-to-one; pointer drags go through a
//! [`SwipeTracker`] that behaves like a touch-swipe recognizer.

pub mod map;
pub mod touch;

pub use classic_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use touch::{CellMetrics, SwipeTracker};
