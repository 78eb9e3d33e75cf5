//! Persistence for the game: the high-score file and the optional event journal.
//!
//! Both are plain files written with `serde_json`. The core crate only sees the
//! [`crate::core::HighScoreStore`] trait; [`JsonFileStore`] is the on-disk
//! implementation used by the binary.

pub mod high_score;
pub mod journal;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use high_score::{parse_high_score, JsonFileStore};
pub use journal::{Journal, LogRecord};
