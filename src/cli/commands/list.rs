use crate::cli::commands::{print_views, warn_skipped};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::slot::DbSlot;
use crate::errors::AppResult;
use crate::store::EventStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { map } = cmd {
        let slot = DbSlot::open(&cfg.database)?;
        let (store, skipped) = EventStore::load_from(&slot)?;
        warn_skipped(skipped);

        print_views(&store, cfg, *map);
    }
    Ok(())
}
