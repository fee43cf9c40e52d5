use crate::cli::commands::load_store;
use crate::cli::views::print_records;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = load_store(cfg)?;
    print_records(&store, &cfg.separator_char);
    Ok(())
}
