// src/export/logic.rs

use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::records_to_export;
use crate::export::notify_export_success;
use crate::export::report::ReportExporter;
use crate::ui::messages::{info, warning};
use chrono::Local;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the register.
    ///
    /// - `format`: txt (report) | csv | json
    /// - `path`: output file; an existing file is only replaced with `force`
    ///   or after confirmation
    /// - `institution`: report header
    ///
    /// Returns `false` when there was nothing to export.
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        path: &Path,
        institution: &str,
        force: bool,
    ) -> AppResult<bool> {
        if store.is_empty() {
            warning("No records to export.");
            return Ok(false);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Txt => {
                info(format!("Exporting report: {}", path.display()));
                ReportExporter::export(store, path, Local::now().naive_local(), institution)?;
                notify_export_success("Report", path);
            }
            ExportFormat::Csv => export_csv(&records_to_export(store), path)?,
            ExportFormat::Json => export_json(&records_to_export(store), path)?,
        }

        Ok(true)
    }
}
