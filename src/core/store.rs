//! In-memory attendance register for one class session.
//!
//! The store owns an ordered list of [`Record`]s. Insertion order is display
//! order; positions shown to the operator are derived, 1-based, on every view.
//! Names are unique under case-insensitive comparison and never blank.

use crate::errors::{AppError, AppResult};
use crate::models::bulk::{BulkEntry, BulkOutcome};
use crate::models::clock::{CheckInTime, RecordedAt};
use crate::models::record::{Record, name_key, normalize_name};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student using the local clock.
    pub fn add(&mut self, name: &str, check_in: Option<CheckInTime>) -> AppResult<Record> {
        self.add_at(name, check_in, RecordedAt::now())
    }

    /// Add a student; `now` stamps `recorded_at` and is the default check-in.
    pub fn add_at(
        &mut self,
        name: &str,
        check_in: Option<CheckInTime>,
        now: RecordedAt,
    ) -> AppResult<Record> {
        let name = self.validate_new_name(name, None)?;
        let record = Record::new(&name, check_in.unwrap_or_else(|| now.check_in()), now);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Best-effort bulk insertion: valid entries are added, invalid ones are
    /// skipped. Returns one outcome per entry, in input order.
    pub fn bulk_add<I>(&mut self, entries: I) -> Vec<BulkOutcome>
    where
        I: IntoIterator<Item = BulkEntry>,
    {
        self.bulk_add_at(entries, RecordedAt::now())
    }

    pub fn bulk_add_at<I>(&mut self, entries: I, now: RecordedAt) -> Vec<BulkOutcome>
    where
        I: IntoIterator<Item = BulkEntry>,
    {
        entries
            .into_iter()
            .map(|entry| match self.add_at(&entry.name, entry.check_in, now) {
                Ok(record) => BulkOutcome::Added(record),
                Err(error) => BulkOutcome::Rejected {
                    name: normalize_name(&entry.name),
                    error,
                },
            })
            .collect()
    }

    /// Change the check-in time of an existing entry.
    pub fn edit(&mut self, name: &str, new_check_in: CheckInTime) -> AppResult<Record> {
        self.edit_at(name, new_check_in, RecordedAt::now())
    }

    pub fn edit_at(
        &mut self,
        name: &str,
        new_check_in: CheckInTime,
        now: RecordedAt,
    ) -> AppResult<Record> {
        let idx = self.index_of(name)?;
        let record = &mut self.records[idx];
        record.check_in = new_check_in;
        record.recorded_at = now;
        Ok(record.clone())
    }

    /// Rename an entry. A different capitalisation of the same name is allowed.
    pub fn rename(&mut self, name: &str, new_name: &str) -> AppResult<Record> {
        self.rename_at(name, new_name, RecordedAt::now())
    }

    pub fn rename_at(&mut self, name: &str, new_name: &str, now: RecordedAt) -> AppResult<Record> {
        let idx = self.index_of(name)?;
        let new_name = self.validate_new_name(new_name, Some(idx))?;
        let record = &mut self.records[idx];
        record.name = new_name;
        record.recorded_at = now;
        Ok(record.clone())
    }

    /// Remove an entry; the others keep their relative order.
    pub fn delete(&mut self, name: &str) -> AppResult<Record> {
        let idx = self.index_of(name)?;
        Ok(self.records.remove(idx))
    }

    /// Case-insensitive substring match on names, in store order.
    pub fn search(&self, query: &str) -> Vec<Record> {
        let q = name_key(query);
        if q.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.key().contains(&q))
            .cloned()
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.matches(name))
    }

    /// 1-based position of `name`, as shown in the "No." column.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.matches(name)).map(|i| i + 1)
    }

    /// Name of the entry at a 1-based position.
    pub fn name_at(&self, position: usize) -> AppResult<String> {
        position
            .checked_sub(1)
            .and_then(|i| self.records.get(i))
            .map(|r| r.name.clone())
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "record number {} (valid range: 1..={})",
                    position,
                    self.records.len()
                ))
            })
    }

    /// Append an already-built record (used when loading from disk).
    /// The same name rules as [`RecordStore::add`] apply.
    pub fn insert(&mut self, record: Record) -> AppResult<()> {
        let name = self.validate_new_name(&record.name, None)?;
        self.records.push(Record { name, ..record });
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Owned snapshot in store order.
    pub fn all(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    fn index_of(&self, name: &str) -> AppResult<usize> {
        self.records
            .iter()
            .position(|r| r.matches(name))
            .ok_or_else(|| AppError::NotFound(format!("no attendance record for '{}'", name.trim())))
    }

    /// Normalize `raw` and check it is neither blank nor taken by another
    /// entry (`skip` is the index of the entry being renamed).
    fn validate_new_name(&self, raw: &str, skip: Option<usize>) -> AppResult<String> {
        let name = normalize_name(raw);
        if name.is_empty() {
            return Err(AppError::Validation("name cannot be empty".into()));
        }

        let key = name_key(&name);
        let taken = self
            .records
            .iter()
            .enumerate()
            .any(|(i, r)| Some(i) != skip && r.key() == key);

        if taken {
            return Err(AppError::Validation(format!(
                "duplicate entry: '{}' is already present",
                name
            )));
        }

        Ok(name)
    }
}
