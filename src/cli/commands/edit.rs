use crate::cli::commands::{load_store, parse_optional_check_in, resolve_target, save_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::storage::log::record_operation;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        name,
        no,
        time,
        rename,
    } = cmd
    {
        let check_in = parse_optional_check_in(time.as_deref())?;
        let new_name = rename.as_deref().map(str::trim).filter(|s| !s.is_empty());

        if check_in.is_none() && new_name.is_none() {
            return Err(AppError::Validation(
                "nothing to change: use --time and/or --rename".into(),
            ));
        }

        let mut store = load_store(cfg)?;
        let target = resolve_target(&store, name.as_deref(), *no)?;

        // rename first, the time edit then follows the new name
        let mut current = target.clone();
        if let Some(n) = new_name {
            let record = store.rename(&current, n)?;
            current = record.name;
        }

        let record = match check_in {
            Some(t) => store.edit(&current, t)?,
            None => store
                .get(&current)
                .cloned()
                .ok_or_else(|| AppError::NotFound(current.clone()))?,
        };

        save_store(cfg, &store)?;

        success(format!(
            "Record updated: {} - {}",
            record.name, record.check_in
        ));
        record_operation(
            &cfg.log_path(),
            if new_name.is_some() { "rename" } else { "edit" },
            &target,
            &format!("now {} at {}", record.name, record.check_in),
        );
    }

    Ok(())
}
