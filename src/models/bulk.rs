use super::clock::CheckInTime;
use super::record::Record;
use crate::errors::AppError;

/// One line of a bulk insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkEntry {
    pub name: String,
    pub check_in: Option<CheckInTime>,
}

impl BulkEntry {
    pub fn new(name: &str, check_in: Option<CheckInTime>) -> Self {
        Self {
            name: name.to_string(),
            check_in,
        }
    }
}

/// Per-entry result of a bulk insertion, in input order.
#[derive(Debug)]
pub enum BulkOutcome {
    Added(Record),
    Rejected { name: String, error: AppError },
}

impl BulkOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, BulkOutcome::Added(_))
    }
}
