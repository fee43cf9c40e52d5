use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::storage::log::record_operation;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { out, compress } = cmd {
        let final_path = BackupLogic::backup(&cfg.store_path(), out.as_deref().map(Path::new), *compress)?;

        record_operation(
            &cfg.log_path(),
            "backup",
            &final_path.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}
