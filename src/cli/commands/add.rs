use crate::cli::commands::{load_store, parse_optional_check_in, save_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::log::record_operation;
use crate::ui::messages::success;

/// Record a single check-in.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        time_pos,
        time,
    } = cmd
    {
        //
        // 1. Parse check-in time (optional, default = now)
        //
        let check_in = parse_optional_check_in(time.as_deref().or(time_pos.as_deref()))?;

        //
        // 2. Load, add, save
        //
        let mut store = load_store(cfg)?;
        let record = store.add(name, check_in)?;
        save_store(cfg, &store)?;

        success(format!("Recorded: {} at {}", record.name, record.check_in));
        record_operation(
            &cfg.log_path(),
            "add",
            &record.name,
            &format!("check-in {}", record.check_in),
        );
    }

    Ok(())
}
