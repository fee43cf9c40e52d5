use crate::cli::commands::load_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::storage::log::record_operation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, out, force } = cmd {
        let store = load_store(cfg)?;
        let path = format.resolve_path(out.as_deref(), &cfg.report_file);

        if ExportLogic::export(&store, *format, &path, &cfg.institution, *force)? {
            record_operation(
                &cfg.log_path(),
                "export",
                &path.to_string_lossy(),
                &format!("{} records as {}", store.size(), format.as_str()),
            );
        }
    }
    Ok(())
}
