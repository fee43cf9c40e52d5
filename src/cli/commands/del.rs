use crate::cli::commands::{ask_confirmation, load_store, resolve_target, save_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::storage::log::record_operation;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { name, no, yes } = cmd {
        let mut store = load_store(cfg)?;
        let target = resolve_target(&store, name.as_deref(), *no)?;

        let record = store
            .get(&target)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no attendance record for '{}'", target.trim())))?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete record {} - {}? This action is irreversible.",
            record.name, record.check_in
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let removed = store.delete(&record.name)?;
        save_store(cfg, &store)?;

        success(format!(
            "Deleted record: {} - {}",
            removed.name, removed.check_in
        ));
        record_operation(&cfg.log_path(), "del", &removed.name, "record deleted");
    }

    Ok(())
}
