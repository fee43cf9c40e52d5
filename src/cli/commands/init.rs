use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::storage::csv_store;
use crate::storage::log::record_operation;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty attendance file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.file.as_deref(), cli.test)?;
    let store_path = cfg.store_path();

    info("Initializing rattendance…");
    println!("📄 Config file     : {}", Config::config_file().display());
    println!("🗂️  Attendance file : {}", store_path.display());

    if store_path.exists() {
        // keep whatever is there, but refuse to start on a corrupt file
        let store = csv_store::load(&store_path)?;
        info(format!(
            "Existing attendance file kept ({} records).",
            store.size()
        ));
    } else {
        csv_store::save(&RecordStore::new(), &store_path)?;
        success(format!("Attendance file created at {}", store_path.display()));
    }

    record_operation(
        &cfg.log_path(),
        "init",
        &store_path.to_string_lossy(),
        "Configuration initialized",
    );

    success("rattendance initialization completed!");
    Ok(())
}
