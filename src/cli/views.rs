//! Terminal views shared by the one-shot commands and the menu.

use crate::core::store::RecordStore;
use crate::errors::AppError;
use crate::models::bulk::BulkOutcome;
use crate::models::record::Record;
use crate::models::summary::{SummaryRow, SummarySnapshot};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{RESET, color_for_absent};
use crate::utils::formatting::{bold, plural, rule};
use crate::utils::table::{Column, Table};

/// Full register: No., Name, Check-in, Recorded At.
pub fn print_records(store: &RecordStore, separator: &str) {
    if store.is_empty() {
        info("No attendance records yet.");
        return;
    }

    header("Attendance Records");
    let table = records_table(store.iter().enumerate().map(|(i, r)| (i + 1, r)));
    let width = table.line_width();

    println!("{}", table.render_header());
    println!("{}", rule(separator, width));
    print!("{}", table.render_rows());
    println!("{}", rule(separator, width));
    println!("Total records: {}", store.size());
}

/// Search results, numbered with their position in the register.
pub fn print_search(store: &RecordStore, query: &str, found: &[Record], separator: &str) {
    if found.is_empty() {
        info(format!("No matching records for '{}'.", query.trim()));
        return;
    }

    println!("Found {}:", plural(found.len(), "record"));
    let table = records_table(
        found
            .iter()
            .map(|r| (store.position_of(&r.name).unwrap_or(0), r)),
    );

    println!("{}", table.render_header());
    println!("{}", rule(separator, table.line_width()));
    print!("{}", table.render_rows());
}

pub fn print_summary(rows: &[SummaryRow], snapshot: &SummarySnapshot, separator: &str) {
    header("Attendance Summary");

    if rows.is_empty() {
        info("No records.");
    } else {
        let mut table = Table::new(vec![
            Column::right("No.", 3),
            Column::left("Name", 25),
            Column::left("Check-in", 8),
        ]);
        for row in rows {
            table.add_row(vec![
                row.position.to_string(),
                row.name.clone(),
                row.check_in.clone(),
            ]);
        }
        let width = table.line_width();

        println!("{}", table.render_header());
        println!("{}", rule(separator, width));
        print!("{}", table.render_rows());
        println!("{}", rule(separator, width));
    }

    println!("Total Students Present: {}", bold(&snapshot.present.to_string()));

    if let (Some(strength), Some(absent)) = (snapshot.class_strength, snapshot.absent) {
        println!("Class Strength        : {}", strength);
        println!(
            "Total Absent          : {}{}{}",
            color_for_absent(absent),
            absent,
            RESET
        );
    }
}

/// One line per bulk entry, then the totals.
pub fn print_bulk_outcomes(outcomes: &[BulkOutcome]) {
    for (i, outcome) in outcomes.iter().enumerate() {
        match outcome {
            BulkOutcome::Added(r) => {
                success(format!("#{} Recorded: {} at {}", i + 1, r.name, r.check_in))
            }
            BulkOutcome::Rejected { name, error } => {
                warning(format!("#{} Skipped '{}': {}", i + 1, name, reason(error)))
            }
        }
    }

    let added = outcomes.iter().filter(|o| o.is_added()).count();
    info(format!(
        "Bulk add finished: {} added, {} skipped.",
        added,
        outcomes.len() - added
    ));
}

fn records_table<'a>(records: impl Iterator<Item = (usize, &'a Record)>) -> Table {
    let mut table = Table::new(vec![
        Column::right("No.", 3),
        Column::left("Name", 25),
        Column::left("Check-in", 10),
        Column::left("Recorded At", 19),
    ]);

    for (pos, r) in records {
        table.add_row(vec![
            pos.to_string(),
            r.name.clone(),
            r.check_in_str(),
            r.recorded_at_str(),
        ]);
    }

    table
}

/// Error text without the category prefix, for per-line reports.
fn reason(error: &AppError) -> String {
    match error {
        AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
        other => other.to_string(),
    }
}
