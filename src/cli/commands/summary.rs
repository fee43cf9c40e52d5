use crate::cli::commands::load_store;
use crate::cli::parser::Commands;
use crate::cli::views::print_summary;
use crate::config::Config;
use crate::core::summary::SummaryComputer;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { strength } = cmd {
        let store = load_store(cfg)?;

        // command line wins over config
        let class_strength = strength.or(cfg.class_strength);

        let rows = SummaryComputer::summarize(&store);
        let snapshot = SummaryComputer::snapshot(&store, class_strength)?;
        print_summary(&rows, &snapshot, &cfg.separator_char);
    }

    Ok(())
}
