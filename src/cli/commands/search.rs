use crate::cli::commands::load_store;
use crate::cli::parser::Commands;
use crate::cli::views::print_search;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { query } = cmd {
        if query.trim().is_empty() {
            return Err(AppError::Validation("empty query".into()));
        }

        let store = load_store(cfg)?;
        let found = store.search(query);
        print_search(&store, query, &found, &cfg.separator_char);
    }

    Ok(())
}
