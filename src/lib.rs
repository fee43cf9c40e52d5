//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function and the register
//! modules (store, summary, report, storage) for embedding and tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Menu) => cli::menu::run(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Add { .. }) => cli::commands::add::handle(cmd, cfg),
        Some(cmd @ Commands::Bulk { .. }) => cli::commands::bulk::handle(cmd, cfg),
        Some(cmd @ Commands::Edit { .. }) => cli::commands::edit::handle(cmd, cfg),
        Some(cmd @ Commands::Del { .. }) => cli::commands::del::handle(cmd, cfg),
        Some(cmd @ Commands::Search { .. }) => cli::commands::search::handle(cmd, cfg),
        Some(Commands::List) => cli::commands::list::handle(cfg),
        Some(cmd @ Commands::Summary { .. }) => cli::commands::summary::handle(cmd, cfg),
        Some(cmd @ Commands::Export { .. }) => cli::commands::export::handle(cmd, cfg),
        Some(cmd @ Commands::Backup { .. }) => cli::commands::backup::handle(cmd, cfg),
        Some(cmd @ Commands::Log { .. }) => cli::commands::log::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE; a broken config file stops here
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the attendance file
    if let Some(custom) = &cli.file {
        cfg.store_file = custom.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
