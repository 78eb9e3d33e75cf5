//! Opt-in JSON-lines journal of session events.
//!
//! One object per line, tagged by `"type"`. The journal never fails the game:
//! the first write error closes it and later records are dropped.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::CoreLastEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        seed: u32,
        high_score: u32,
    },
    Lock {
        piece: &'static str,
        lines_cleared: u8,
        line_clear_score: u32,
        score: u32,
    },
    HighScore {
        score: u32,
        saved: bool,
    },
    GameOver {
        score: u32,
        high_score: u32,
    },
}

pub struct Journal {
    file: Option<File>,
    buf: Vec<u8>,
}

impl Journal {
    /// A journal that drops every record.
    pub fn disabled() -> Self {
        Self {
            file: None,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open journal {}", path.display()))?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(256),
        })
    }

    /// Open the journal if a path is configured; an unusable path disables it.
    pub fn from_path(path: Option<&Path>) -> Self {
        path.and_then(|p| Self::open(p).ok())
            .unwrap_or_else(Self::disabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(file) = self.file.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if file.write_all(&self.buf).is_err() {
            self.file = None;
        }
    }

    /// Journal a lock event: the lock itself, a new high score, or game over.
    pub fn record_event(&mut self, event: &CoreLastEvent, high_score: u32) {
        if event.game_over {
            self.record(&LogRecord::GameOver {
                score: event.score,
                high_score,
            });
            return;
        }

        self.record(&LogRecord::Lock {
            piece: event.kind.as_str(),
            lines_cleared: event.lines_cleared,
            line_clear_score: event.line_clear_score,
            score: event.score,
        });
        if event.new_high_score {
            self.record(&LogRecord::HighScore {
                score: event.score,
                saved: event.high_score_saved,
            });
        }
    }
}
