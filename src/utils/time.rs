//! Time utilities: flexible check-in parsing and the canonical text formats
//! used by the store file, the views and the report.

use chrono::{NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// Check-in time as shown everywhere: `09:15 AM`.
pub const CHECK_IN_FORMAT: &str = "%I:%M %p";

/// Timestamps (`recorded_at`, report generation): `2025-11-12 09:15:42`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats accepted for operator input, tried in order.
const INPUT_FORMATS: [&str; 5] = ["%I:%M %p", "%I:%M%p", "%H:%M", "%H:%M:%S", "%I:%M:%S %p"];

// 915 -> 09:15, 2130 -> 21:30
static COMPACT_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})(\d{2})$").expect("valid compact time regex"));

/// Parse a time of day typed by the operator.
///
/// Accepts `09:15 AM`, `9:15am`, `09:15`, `21:15`, `09:15:30` and the compact
/// digits form `915` / `0915` (read as 24-hour `HHMM`).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let s = t.trim().to_ascii_uppercase();
    if s.is_empty() {
        return None;
    }

    for fmt in INPUT_FORMATS {
        if let Ok(parsed) = NaiveTime::parse_from_str(&s, fmt) {
            return Some(parsed);
        }
    }

    let compact = s.replace(' ', "");
    let caps = COMPACT_TIME.captures(&compact)?;
    let hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

pub fn format_check_in(t: NaiveTime) -> String {
    t.format(CHECK_IN_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
