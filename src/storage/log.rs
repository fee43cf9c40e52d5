use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: usize,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an internal log line (tab separated) to the operation log.
pub fn oplog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, ISO 8601
    let now = Local::now().to_rfc3339();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(file);

    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

/// Same as [`oplog`] but never fails: a write error becomes a warning.
pub fn record_operation(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = oplog(path, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Read the whole log; a missing file is an empty log.
pub fn read_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = result?;
        let field = |n: usize| row.get(n).unwrap_or_default().to_string();

        entries.push(LogEntry {
            id: i + 1,
            date: field(0),
            operation: field(1),
            target: field(2),
            message: field(3),
        });
    }

    Ok(entries)
}
