//! Scoring module - line clear points
//!
//! One lookup per placement: the number of lines the placement cleared indexes
//! [`LINE_SCORES`]. There is no level multiplier, drop bonus or combo.

use crate::types::LINE_SCORES;

/// Points for a single placement that cleared `lines` rows.
///
/// A piece spans at most four rows, so `lines > 4` is a logic error. Debug
/// builds assert; release builds clamp to the four-line value.
pub fn line_clear_score(lines: u8) -> u32 {
    debug_assert!(
        (lines as usize) < LINE_SCORES.len(),
        "a placement cannot clear {lines} lines"
    );
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx]
}
