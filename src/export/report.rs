//! Plain-text attendance report.
//!
//! ```text
//! KR Mangalam University - Attendance Report
//! Generated: 2025-11-12 10:30:00
//! ==================================================
//! Name                           Check-in   Recorded At
//! --------------------------------------------------
//! Riya Sharma                    09:00 AM   2025-11-12 09:00:12
//! --------------------------------------------------
//! Total Present: 1
//! ```

use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::storage::write_atomic;
use crate::utils::formatting::pad_right;
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_REPORT_FILE: &str = "attendance_report.txt";

const NAME_WIDTH: usize = 30;
const CHECK_IN_WIDTH: usize = 10;
const RULE_WIDTH: usize = 50;

pub struct ReportExporter;

impl ReportExporter {
    pub fn render(store: &RecordStore, generated_at: NaiveDateTime, header: &str) -> String {
        // long names widen the whole column
        let name_w = store
            .iter()
            .map(|r| UnicodeWidthStr::width(r.name.as_str()))
            .max()
            .unwrap_or(0)
            .max(NAME_WIDTH);

        let mut out = String::new();

        out.push_str(&format!("{} - Attendance Report\n", header.trim()));
        out.push_str(&format!("Generated: {}\n", format_timestamp(generated_at)));
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&format!(
            "{} {} {}\n",
            pad_right("Name", name_w),
            pad_right("Check-in", CHECK_IN_WIDTH),
            "Recorded At"
        ));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');

        for r in store.iter() {
            out.push_str(&format!(
                "{} {} {}\n",
                pad_right(&r.name, name_w),
                pad_right(&r.check_in_str(), CHECK_IN_WIDTH),
                r.recorded_at_str()
            ));
        }

        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&format!("Total Present: {}\n", store.size()));

        out
    }

    /// Render in memory, then replace `path` in a single write.
    pub fn export(
        store: &RecordStore,
        path: &Path,
        generated_at: NaiveDateTime,
        header: &str,
    ) -> AppResult<()> {
        let text = Self::render(store, generated_at, header);
        write_atomic(path, text.as_bytes())
    }
}
