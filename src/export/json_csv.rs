// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{RecordExport, notify_export_success};
use crate::storage::write_atomic;
use crate::ui::messages::info;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;
    write_atomic(path, json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header included through serde).
pub(crate) fn export_csv(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_writer(Vec::new());
    for item in records {
        wtr.serialize(item)?;
    }
    let bytes = wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))?;

    write_atomic(path, &bytes)?;

    notify_export_success("CSV", path);
    Ok(())
}
