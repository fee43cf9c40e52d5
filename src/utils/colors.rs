/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Absentees:
/// 0 → green
/// \>0 → red
pub fn color_for_absent(value: usize) -> &'static str {
    if value == 0 { GREEN } else { RED }
}
