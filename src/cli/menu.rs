//! Interactive numbered menu.
//!
//! The session owns the register for the whole run. With `autosave` every
//! change is written immediately; otherwise the operator saves with option 9
//! and pending changes are written on quit. End of input behaves like quit.

use crate::cli::commands::bulk::{RawEntry, apply_bulk};
use crate::cli::commands::{ask_confirmation, load_store, parse_optional_check_in, save_store};
use crate::cli::views::{print_bulk_outcomes, print_records, print_search, print_summary};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::store::RecordStore;
use crate::core::summary::SummaryComputer;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::storage::log::record_operation;
use crate::ui::messages::{error, info, prompt, success, warning};
use crate::utils::formatting::plural;
use std::io;

const MENU: [&str; 12] = [
    "1. Add single entry",
    "2. Bulk add entries",
    "3. View all records",
    "4. Search by name",
    "5. Edit a record",
    "6. Delete a record",
    "7. Attendance summary & absentees",
    "8. Export report to TXT",
    "9. Save",
    "10. Reload from disk",
    "11. Backup attendance file",
    "0. Exit",
];

/// Load the configured register and run the menu until the operator quits.
/// A corrupt attendance file is returned as an error before the menu starts.
pub fn run(cfg: &Config) -> AppResult<()> {
    let store = load_store(cfg)?;
    info(format!(
        "Loaded {} from {}",
        plural(store.size(), "record"),
        cfg.store_path().display()
    ));

    Session::new(cfg.clone(), store).run()
}

struct Session {
    cfg: Config,
    store: RecordStore,
    dirty: bool,
}

impl Session {
    fn new(cfg: Config, store: RecordStore) -> Self {
        Self {
            cfg,
            store,
            dirty: false,
        }
    }

    fn run(&mut self) -> AppResult<()> {
        loop {
            println!("\n---------- Attendance Register ----------");
            for line in MENU {
                println!("{line}");
            }

            let Some(choice) = read_input("Choose an option: ")? else {
                return self.quit();
            };

            let result = match choice.as_str() {
                "1" => self.add_single(),
                "2" => self.bulk_add(),
                "3" => {
                    print_records(&self.store, &self.cfg.separator_char);
                    Ok(())
                }
                "4" => self.search(),
                "5" => self.edit(),
                "6" => self.delete(),
                "7" => self.summary(),
                "8" => self.export(),
                "9" => self.save(),
                "10" => self.reload(),
                "11" => self.backup(),
                "0" => return self.quit(),
                other => {
                    warning(format!("Invalid option '{}'. Try again.", other));
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => error(e),
                Err(e) => return Err(e),
            }
        }
    }

    fn add_single(&mut self) -> AppResult<()> {
        let Some(name) = read_input("Enter student name: ")? else {
            return Ok(());
        };
        let Some(time) = read_input("Check-in time (e.g. 09:15 AM, blank = now): ")? else {
            return Ok(());
        };

        let check_in = parse_optional_check_in(Some(&time))?;
        let record = self.store.add(&name, check_in)?;

        success(format!("Recorded: {} at {}", record.name, record.check_in));
        self.after_change("add", &record.name, &format!("check-in {}", record.check_in))
    }

    fn bulk_add(&mut self) -> AppResult<()> {
        let Some(count) = read_input("How many entries do you want to add? ")? else {
            return Ok(());
        };
        let n = parse_number(&count)?;

        let mut entries: Vec<RawEntry> = Vec::new();
        for i in 1..=n {
            println!("\nEntry {i}/{n}");
            let Some(name) = read_input("Enter student name: ")? else {
                break;
            };
            let Some(time) = read_input("Check-in time (blank = now): ")? else {
                break;
            };
            entries.push((name, Some(time).filter(|t| !t.is_empty())));
        }

        let outcomes = apply_bulk(&mut self.store, entries);
        print_bulk_outcomes(&outcomes);

        let added = outcomes.iter().filter(|o| o.is_added()).count();
        if added == 0 {
            return Ok(());
        }
        self.after_change(
            "bulk",
            "",
            &format!("{} added, {} skipped", added, outcomes.len() - added),
        )
    }

    fn search(&mut self) -> AppResult<()> {
        let Some(query) = read_input("Search by name (partial allowed): ")? else {
            return Ok(());
        };
        if query.is_empty() {
            return Err(AppError::Validation("empty query".into()));
        }

        let found = self.store.search(&query);
        print_search(&self.store, &query, &found, &self.cfg.separator_char);
        Ok(())
    }

    fn edit(&mut self) -> AppResult<()> {
        let Some(target) = self.pick_record("edit")? else {
            return Ok(());
        };
        if let Some(r) = self.store.get(&target) {
            info(format!("Editing: {} - {}", r.name, r.check_in));
        }

        let Some(new_name) = read_input("New name (leave blank to keep): ")? else {
            return Ok(());
        };
        let Some(new_time) = read_input("New check-in time (leave blank to keep): ")? else {
            return Ok(());
        };

        // parse before touching the store
        let check_in = parse_optional_check_in(Some(&new_time))?;
        if new_name.is_empty() && check_in.is_none() {
            info("Nothing changed.");
            return Ok(());
        }

        let mut current = target.clone();
        if !new_name.is_empty() {
            current = self.store.rename(&current, &new_name)?.name;
        }
        let record = match check_in {
            Some(t) => self.store.edit(&current, t)?,
            None => self
                .store
                .get(&current)
                .cloned()
                .ok_or_else(|| AppError::NotFound(current.clone()))?,
        };

        success("Record updated.");
        self.after_change(
            if new_name.is_empty() { "edit" } else { "rename" },
            &target,
            &format!("now {} at {}", record.name, record.check_in),
        )
    }

    fn delete(&mut self) -> AppResult<()> {
        let Some(target) = self.pick_record("delete")? else {
            return Ok(());
        };

        if !ask_confirmation(&format!("Are you sure you want to delete '{}'?", target)) {
            info("Delete cancelled.");
            return Ok(());
        }

        let removed = self.store.delete(&target)?;
        success(format!(
            "Deleted record: {} - {}",
            removed.name, removed.check_in
        ));
        self.after_change("del", &removed.name, "record deleted")
    }

    fn summary(&mut self) -> AppResult<()> {
        let rows = SummaryComputer::summarize(&self.store);
        let snapshot = SummaryComputer::snapshot(&self.store, None)?;
        print_summary(&rows, &snapshot, &self.cfg.separator_char);

        let Some(answer) =
            read_input("Do you want to compute absentees (provide class strength)? (yes/no): ")?
        else {
            return Ok(());
        };
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            return Ok(());
        }

        let label = match self.cfg.class_strength {
            Some(n) => format!("Enter total number of students in the class [{n}]: "),
            None => "Enter total number of students in the class: ".to_string(),
        };
        let Some(raw) = read_input(&label)? else {
            return Ok(());
        };

        let strength = match (raw.is_empty(), self.cfg.class_strength) {
            (true, Some(n)) => n,
            _ => raw.parse::<i64>().map_err(|_| {
                AppError::Validation(format!("invalid number for class strength: '{raw}'"))
            })?,
        };

        let absent = SummaryComputer::compute_absentees(self.store.size(), strength)?;
        println!("Total Present: {}", self.store.size());
        println!("Total Absent : {}", absent);
        Ok(())
    }

    fn export(&mut self) -> AppResult<()> {
        if self.store.is_empty() {
            warning("No records to export.");
            return Ok(());
        }

        let Some(name) = read_input(&format!(
            "Enter filename for report (default: {}): ",
            self.cfg.report_file
        ))?
        else {
            return Ok(());
        };

        let path = ExportFormat::Txt.resolve_path(Some(&name), &self.cfg.report_file);
        if ExportLogic::export(&self.store, ExportFormat::Txt, &path, &self.cfg.institution, false)? {
            record_operation(
                &self.cfg.log_path(),
                "export",
                &path.to_string_lossy(),
                &format!("{} records as txt", self.store.size()),
            );
        }
        Ok(())
    }

    fn save(&mut self) -> AppResult<()> {
        save_store(&self.cfg, &self.store)?;
        self.dirty = false;

        let path = self.cfg.store_path();
        success(format!("Saved {} to {}", plural(self.store.size(), "record"), path.display()));
        record_operation(
            &self.cfg.log_path(),
            "save",
            &path.to_string_lossy(),
            &format!("{} records", self.store.size()),
        );
        Ok(())
    }

    /// On a malformed file the error is reported and the current register kept.
    fn reload(&mut self) -> AppResult<()> {
        if self.dirty && !ask_confirmation("Unsaved changes will be discarded. Reload anyway?") {
            info("Reload cancelled.");
            return Ok(());
        }

        let store = load_store(&self.cfg)?;
        self.store = store;
        self.dirty = false;
        info(format!("Reloaded {}.", plural(self.store.size(), "record")));
        Ok(())
    }

    fn backup(&mut self) -> AppResult<()> {
        if self.dirty {
            warning("Unsaved changes are not part of the backup; save first (option 9).");
        }

        let final_path = BackupLogic::backup(&self.cfg.store_path(), None, false)?;
        record_operation(
            &self.cfg.log_path(),
            "backup",
            &final_path.to_string_lossy(),
            "Backup created",
        );
        Ok(())
    }

    fn quit(&mut self) -> AppResult<()> {
        if self.dirty {
            self.save()?;
        }
        success("Exiting. Goodbye!");
        Ok(())
    }

    /// Show the register and ask for a record number; `None` on cancel.
    fn pick_record(&self, action: &str) -> AppResult<Option<String>> {
        print_records(&self.store, &self.cfg.separator_char);
        if self.store.is_empty() {
            return Ok(None);
        }

        let Some(raw) = read_input(&format!(
            "Enter record number to {action} (0 to cancel): "
        ))?
        else {
            return Ok(None);
        };

        match parse_number(&raw)? {
            0 => Ok(None),
            n => self.store.name_at(n).map(Some),
        }
    }

    fn after_change(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.dirty = true;
        if self.cfg.autosave {
            save_store(&self.cfg, &self.store)?;
            self.dirty = false;
        }
        record_operation(&self.cfg.log_path(), operation, target, message);
        Ok(())
    }
}

/// Read one trimmed line; `None` at end of input.
fn read_input(label: &str) -> AppResult<Option<String>> {
    prompt(label);

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_number(raw: &str) -> AppResult<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| AppError::Validation(format!("invalid number: '{}'", raw.trim())))
}
