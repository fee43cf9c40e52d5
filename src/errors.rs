//! Unified application error type.
//! All modules (store, storage, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Compression error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed attendance file at line {line}: {reason} (content: '{content}')")]
    Format {
        line: u64,
        content: String,
        reason: String,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Could not parse time '{0}'. Please enter like '09:15' or '09:15 AM'.")]
    InvalidTime(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Errors the interactive menu reports and then re-prompts on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Config(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
