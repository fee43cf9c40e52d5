// src/export/model.rs

use crate::core::store::RecordStore;
use serde::Serialize;

/// Flat record used by the CSV / JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub no: usize,
    pub name: String,
    pub check_in_time: String,
    pub recorded_at: String,
}

pub(crate) fn records_to_export(store: &RecordStore) -> Vec<RecordExport> {
    store
        .iter()
        .enumerate()
        .map(|(i, r)| RecordExport {
            no: i + 1,
            name: r.name.clone(),
            check_in_time: r.check_in_str(),
            recorded_at: r.recorded_at_str(),
        })
        .collect()
}
