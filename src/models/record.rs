use super::clock::{CheckInTime, RecordedAt};

/// One student's attendance entry for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,            // normalized, never blank
    pub check_in: CheckInTime,   // hh:mm AM/PM
    pub recorded_at: RecordedAt, // creation or last edit
}

impl Record {
    pub fn new(name: &str, check_in: CheckInTime, recorded_at: RecordedAt) -> Self {
        Self {
            name: normalize_name(name),
            check_in,
            recorded_at,
        }
    }

    /// Key used for uniqueness and lookups.
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    pub fn matches(&self, name: &str) -> bool {
        self.key() == name_key(name)
    }

    pub fn check_in_str(&self) -> String {
        self.check_in.to_string()
    }

    pub fn recorded_at_str(&self) -> String {
        self.recorded_at.to_string()
    }
}

/// Trim and collapse inner whitespace: `"  Riya   Sharma "` → `"Riya Sharma"`.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive form of a normalized name.
pub fn name_key(raw: &str) -> String {
    normalize_name(raw).to_lowercase()
}
