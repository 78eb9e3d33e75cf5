//! Runner configuration from environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::input::CellMetrics;
use crate::types::{GRAVITY_TICKS, TICK_MS};

pub const DEFAULT_HIGH_SCORE_PATH: &str = ".classic-tetris-highscore.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub tick_ms: u64,
    pub gravity_ticks: u32,
    pub high_score_path: PathBuf,
    /// JSON-lines journal; disabled when unset.
    pub log_path: Option<PathBuf>,
    pub cell_metrics: CellMetrics,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS as u64,
            gravity_ticks: GRAVITY_TICKS,
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            log_path: None,
            cell_metrics: CellMetrics::default(),
        }
    }
}

impl Config {
    /// Read `TETRIS_*` variables, falling back to defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
        };
        let defaults = Self::default();

        let seed = parse_var(&lookup, "TETRIS_SEED").unwrap_or_else(time_seed);
        let tick_ms = parse_var(&lookup, "TETRIS_TICK_MS")
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.tick_ms);
        let gravity_ticks = parse_var(&lookup, "TETRIS_GRAVITY_TICKS").unwrap_or(defaults.gravity_ticks);
        let high_score_path = path("TETRIS_HIGH_SCORE_PATH").unwrap_or(defaults.high_score_path);
        let log_path = path("TETRIS_LOG_PATH");

        let cell_metrics = CellMetrics::new(
            parse_var(&lookup, "TETRIS_CELL_PX_W")
                .filter(|&px: &u16| px > 0)
                .unwrap_or(defaults.cell_metrics.px_w),
            parse_var(&lookup, "TETRIS_CELL_PX_H")
                .filter(|&px: &u16| px > 0)
                .unwrap_or(defaults.cell_metrics.px_h),
        );

        Self {
            seed,
            tick_ms,
            gravity_ticks,
            high_score_path,
            log_path,
            cell_metrics,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
