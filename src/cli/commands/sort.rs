use crate::cli::commands::{print_views, warn_skipped};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sort::SortLogic;
use crate::db::slot::DbSlot;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sort { field } = cmd {
        let mut slot = DbSlot::open(&cfg.database)?;
        let (mut store, skipped) = EventStore::load_from(&slot)?;
        warn_skipped(skipped);

        if store.is_empty() {
            info("No events to sort.");
            return Ok(());
        }

        let applied = SortLogic::apply(&mut store, &mut slot, *field)?;

        print_views(&store, cfg, true);
        success(format!("Sorted by {} ({})", field.as_str(), applied.as_str()));
    }
    Ok(())
}
