pub mod add;
pub mod backup;
pub mod bulk;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod search;
pub mod summary;

use crate::config::Config;
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::clock::CheckInTime;
use crate::storage::csv_store;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Load the register configured for this run.
pub fn load_store(cfg: &Config) -> AppResult<RecordStore> {
    csv_store::load(&cfg.store_path())
}

pub fn save_store(cfg: &Config, store: &RecordStore) -> AppResult<()> {
    csv_store::save(store, &cfg.store_path())
}

/// `None` / blank → use the current time.
pub fn parse_optional_check_in(input: Option<&str>) -> AppResult<Option<CheckInTime>> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => Ok(Some(CheckInTime::parse(s)?)),
        None => Ok(None),
    }
}

/// Resolve a record selected either by name or by its `list` number.
pub fn resolve_target(
    store: &RecordStore,
    name: Option<&str>,
    no: Option<usize>,
) -> AppResult<String> {
    match (name, no) {
        (_, Some(position)) => store.name_at(position),
        (Some(n), None) => Ok(n.to_string()),
        (None, None) => Err(crate::errors::AppError::Validation(
            "specify a student NAME or --no <N>".into(),
        )),
    }
}

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
