use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::summary::{SummaryRow, SummarySnapshot};

pub struct SummaryComputer;

impl SummaryComputer {
    /// Tabular view of the store: (No., name, check-in) in store order.
    pub fn summarize(store: &RecordStore) -> Vec<SummaryRow> {
        store
            .iter()
            .enumerate()
            .map(|(i, r)| SummaryRow {
                position: i + 1,
                name: r.name.clone(),
                check_in: r.check_in_str(),
            })
            .collect()
    }

    /// Absentees for a class of `class_strength` students.
    ///
    /// Fails when the strength is not a positive integer or when more students
    /// are present than enrolled.
    pub fn compute_absentees(present: usize, class_strength: i64) -> AppResult<usize> {
        if class_strength <= 0 {
            return Err(AppError::Validation(format!(
                "class strength must be a positive integer (got {class_strength})"
            )));
        }

        let strength = usize::try_from(class_strength)
            .map_err(|_| AppError::Validation(format!("class strength too large: {class_strength}")))?;

        if strength < present {
            return Err(AppError::Validation(format!(
                "present count ({present}) exceeds class strength ({strength})"
            )));
        }

        Ok(strength - present)
    }

    pub fn snapshot(store: &RecordStore, class_strength: Option<i64>) -> AppResult<SummarySnapshot> {
        let present = store.size();

        match class_strength {
            None => Ok(SummarySnapshot {
                present,
                ..Default::default()
            }),
            Some(strength) => {
                let absent = Self::compute_absentees(present, strength)?;
                Ok(SummarySnapshot {
                    present,
                    class_strength: Some(present + absent),
                    absent: Some(absent),
                })
            }
        }
    }
}
