//! Load/save the register as CSV: `name,check_in_time,recorded_at`.

use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::clock::{CheckInTime, RecordedAt};
use crate::models::record::Record;
use crate::storage::write_atomic;
use csv::StringRecord;
use std::fs;
use std::path::Path;
use std::str::Utf8Error;

pub const HEADERS: [&str; 3] = ["name", "check_in_time", "recorded_at"];

/// Load the register from `path`. A missing file yields an empty store.
pub fn load(path: &Path) -> AppResult<RecordStore> {
    if !path.exists() {
        return Ok(RecordStore::new());
    }

    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|e| utf8_error(e.as_bytes(), e.utf8_error()))?;
    parse(&content)
}

/// Point at the line holding the first invalid byte.
fn utf8_error(bytes: &[u8], err: Utf8Error) -> AppError {
    let valid = &bytes[..err.valid_up_to()];
    let line_start = valid.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    let line_end = bytes[line_start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |i| line_start + i);

    AppError::Format {
        line: valid.iter().filter(|&&b| b == b'\n').count() as u64 + 1,
        content: String::from_utf8_lossy(&bytes[line_start..line_end])
            .trim_end_matches('\r')
            .to_string(),
        reason: "file is not valid UTF-8".into(),
    }
}

/// Parse CSV text into a store. The header row is optional.
pub fn parse(content: &str) -> AppResult<RecordStore> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut store = RecordStore::new();

    for (i, result) in rdr.records().enumerate() {
        let row = result?;
        if i == 0 && is_header(&row) {
            continue;
        }

        let line = row.position().map(|p| p.line()).unwrap_or(i as u64 + 1);
        let record = parse_row(&row).map_err(|reason| AppError::Format {
            line,
            content: row.iter().collect::<Vec<_>>().join(","),
            reason,
        })?;

        store.insert(record).map_err(|e| AppError::Format {
            line,
            content: row.iter().collect::<Vec<_>>().join(","),
            reason: e.to_string(),
        })?;
    }

    Ok(store)
}

/// Write the register to `path` (header + one row per record, store order).
pub fn save(store: &RecordStore, path: &Path) -> AppResult<()> {
    let bytes = to_csv_bytes(store)?;
    write_atomic(path, &bytes)
}

pub fn to_csv_bytes(store: &RecordStore) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(HEADERS)?;

    for r in store.iter() {
        wtr.write_record(&[r.name.clone(), r.check_in_str(), r.recorded_at_str()])?;
    }

    wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))
}

fn is_header(row: &StringRecord) -> bool {
    row.len() == HEADERS.len()
        && row
            .iter()
            .zip(HEADERS)
            .all(|(field, h)| field.trim().eq_ignore_ascii_case(h))
}

fn parse_row(row: &StringRecord) -> Result<Record, String> {
    if row.len() != HEADERS.len() {
        return Err(format!(
            "expected {} fields, found {}",
            HEADERS.len(),
            row.len()
        ));
    }

    let check_in = CheckInTime::parse(&row[1]).map_err(|e| e.to_string())?;
    let recorded_at = RecordedAt::parse(&row[2]).map_err(|e| e.to_string())?;

    Ok(Record::new(&row[0], check_in, recorded_at))
}
