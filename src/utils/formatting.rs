//! Formatting utilities used for CLI and export outputs.
//! Widths are display columns, so accented or CJK names line up.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// Horizontal rule built from the configured separator.
pub fn rule(separator: &str, width: usize) -> String {
    let sep = separator.chars().next().unwrap_or('-');
    std::iter::repeat_n(sep, width).collect()
}

pub fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}
