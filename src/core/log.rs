use crate::errors::AppResult;
use crate::storage::log::read_log;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 60;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// ANSI colour by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "bulk" => Colour::Green,
        "del" => Colour::Red,
        "edit" | "rename" => Colour::Yellow,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "save" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_log(path)?;

        if entries.is_empty() {
            info(format!("The internal log is empty ({}).", path.display()));
            return Ok(());
        }

        let rows: Vec<(usize, String, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);

                // single op+target column
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };

                (e.id, date, e.operation, op_target, e.message)
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = rows
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let line = colorize_op_target(&operation, &op_target);
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&line).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                line,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

/// Truncate to the column width (57 chars + "...") and paint the operation word.
fn colorize_op_target(operation: &str, op_target: &str) -> String {
    let color = color_for_operation(operation);

    let visible = if op_target.chars().count() > MAX_OP_WIDTH {
        let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        op_target.to_string()
    };

    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}
