// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod report;

pub use logic::ExportLogic;
pub use model::RecordExport;
pub use report::ReportExporter;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Common helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Fixed-width text report
    Txt,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Output path for this format.
    ///
    /// - no name given → the configured report file, with this format's extension
    /// - txt → `.txt` is appended when missing
    /// - csv/json → the name is used as given
    pub fn resolve_path(&self, requested: Option<&str>, default_report: &str) -> PathBuf {
        match requested.map(str::trim).filter(|s| !s.is_empty()) {
            None => {
                let base = PathBuf::from(default_report);
                match self {
                    ExportFormat::Txt => with_txt_extension(base),
                    other => base.with_extension(other.as_str()),
                }
            }
            Some(name) => match self {
                ExportFormat::Txt => with_txt_extension(PathBuf::from(name)),
                _ => PathBuf::from(name),
            },
        }
    }
}

fn with_txt_extension(path: PathBuf) -> PathBuf {
    let has_txt = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    if has_txt {
        path
    } else {
        let mut s = path.into_os_string();
        s.push(".txt");
        PathBuf::from(s)
    }
}
