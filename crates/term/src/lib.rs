//! Terminal rendering module.
//!
//! The render collaborator of the game: it reads a [`crate::core::GameSnapshot`]
//! and never feeds anything back into the session.
//!
//! Pipeline:
//! - [`GameView`] draws a snapshot into a [`FrameBuffer`] (pure, unit-testable)
//! - [`TerminalRenderer`] diffs framebuffers and flushes the changes through crossterm
//!
//! Board cells are drawn 2 characters wide to compensate for the typical
//! terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
