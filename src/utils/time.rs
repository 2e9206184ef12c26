//! Time utilities: extracting HH:MM from cell text, formatting minute
//! durations and grading them with an emoji.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+:[0-9]+").unwrap());

/// Grade thresholds in minutes, ascending. First `limit` greater than the
/// value wins; anything at or above the last one gets `TOP_GRADE`.
///
/// The thresholds are clock times (8:00, 8:15, ...) compared directly against
/// the duration value, which is how the grading has always behaved.
const GRADES: [(i64, char); 6] = [
    (8 * 60, '\u{1F910}'),      // zipper mouth
    (8 * 60 + 15, '\u{1F92B}'), // shushing
    (8 * 60 + 30, '\u{1F642}'), // slight smile
    (9 * 60, '\u{1F44D}'),      // thumbs up
    (10 * 60, '\u{1F91D}'),     // handshake
    (12 * 60, '\u{1F60D}'),     // heart eyes
];
const TOP_GRADE: char = '\u{1F911}'; // money mouth

/// Minutes since midnight of the first `digits:digits` found in `text`.
///
/// `None` means "no time in this cell", which callers must not confuse with 0:00.
/// Only ASCII digits count, and a value too large for `i64` minutes is `None`.
pub fn parse_clock_time(text: &str) -> Option<i64> {
    let found = CLOCK_RE.find(text)?;
    let (h, m) = found.as_str().split_once(':')?;
    let hours: i64 = h.parse().ok()?;
    let minutes: i64 = m.parse().ok()?;
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Strict variant used by the CLI, where a missing time is a user error.
pub fn parse_required_time(text: &str) -> AppResult<i64> {
    parse_clock_time(text).ok_or_else(|| AppError::InvalidTime(text.to_string()))
}

/// `H:MM` without a leading zero on hours; negative durations are "N/A".
pub fn format_duration(mins: i64) -> String {
    if mins < 0 {
        return "N/A".to_string();
    }
    format!("{}:{:02}", mins / 60, mins % 60)
}

pub fn emoji_for_duration(mins: i64) -> char {
    GRADES
        .iter()
        .find(|(limit, _)| mins < *limit)
        .map(|(_, emoji)| *emoji)
        .unwrap_or(TOP_GRADE)
}

/// Text written into a row's annotation cell, e.g. `8:00 🤫`.
pub fn duration_label(mins: i64) -> String {
    format!("{} {}", format_duration(mins), emoji_for_duration(mins))
}
