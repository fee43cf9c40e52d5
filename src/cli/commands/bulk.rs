use crate::cli::commands::{load_store, parse_optional_check_in, save_store};
use crate::cli::parser::Commands;
use crate::cli::views::print_bulk_outcomes;
use crate::config::Config;
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::bulk::{BulkEntry, BulkOutcome};
use crate::models::record::normalize_name;
use crate::storage::log::record_operation;
use std::fs;
use std::io::{self, Read};

/// Raw bulk line: name and optional time text.
pub type RawEntry = (String, Option<String>);

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bulk { from } = cmd {
        let text = match from {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let entries = parse_entries(&text)?;
        let mut store = load_store(cfg)?;
        let outcomes = apply_bulk(&mut store, entries);

        let added = outcomes.iter().filter(|o| o.is_added()).count();
        if added > 0 {
            save_store(cfg, &store)?;
        }

        print_bulk_outcomes(&outcomes);
        record_operation(
            &cfg.log_path(),
            "bulk",
            "",
            &format!("{} added, {} skipped", added, outcomes.len() - added),
        );
    }

    Ok(())
}

/// Parse `name[,time]` lines. Blank lines and `#` comments are ignored.
pub fn parse_entries(text: &str) -> AppResult<Vec<RawEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(text.as_bytes());

    let mut entries = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let name = row.get(0).unwrap_or_default().to_string();
        let time = row.get(1).filter(|t| !t.is_empty()).map(str::to_string);

        if name.is_empty() && time.is_none() {
            continue;
        }
        entries.push((name, time));
    }

    Ok(entries)
}

/// Best-effort insertion of raw entries.
///
/// Entries whose time cannot be parsed are rejected without reaching the
/// store; the rest go through [`RecordStore::bulk_add`]. Outcomes keep the
/// input order.
pub fn apply_bulk(store: &mut RecordStore, entries: Vec<RawEntry>) -> Vec<BulkOutcome> {
    let parsed: Vec<Result<BulkEntry, BulkOutcome>> = entries
        .into_iter()
        .map(|(name, time)| match parse_optional_check_in(time.as_deref()) {
            Ok(check_in) => Ok(BulkEntry::new(&name, check_in)),
            Err(error) => Err(BulkOutcome::Rejected {
                name: normalize_name(&name),
                error,
            }),
        })
        .collect();

    let valid: Vec<BulkEntry> = parsed
        .iter()
        .filter_map(|p| p.as_ref().ok().cloned())
        .collect();
    let mut applied = store.bulk_add(valid).into_iter();

    parsed
        .into_iter()
        .filter_map(|p| match p {
            Ok(_) => applied.next(),
            Err(rejected) => Some(rejected),
        })
        .collect()
}
