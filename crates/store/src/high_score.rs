//! High score persisted as a small JSON document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::core::HighScoreStore;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HighScoreDoc {
    high_score: u32,
}

/// Parse a stored high score.
///
/// Accepts `{"highScore": N}` and a bare integer document. Anything else,
/// negative or out-of-range values included, reads as 0.
pub fn parse_high_score(text: &str) -> u32 {
    let Ok(value) = serde_json::from_str::<Value>(text.trim()) else {
        return 0;
    };
    let score = match &value {
        Value::Object(map) => map.get("highScore").and_then(Value::as_u64),
        Value::Number(n) => n.as_u64(),
        _ => None,
    };
    score.and_then(|n| u32::try_from(n).ok()).unwrap_or(0)
}

/// [`HighScoreStore`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&mut self) -> u32 {
        fs::read_to_string(&self.path)
            .map(|text| parse_high_score(&text))
            .unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u32) -> io::Result<()> {
        let bytes = serde_json::to_vec(&HighScoreDoc { high_score: score })?;
        fs::write(&self.path, bytes)
    }
}
