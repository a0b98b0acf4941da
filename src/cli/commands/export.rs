use crate::cli::commands::warn_skipped;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::slot::DbSlot;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::EventStore;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, file, force } = cmd {
        let slot = DbSlot::open(&cfg.database)?;
        let (store, skipped) = EventStore::load_from(&slot)?;
        warn_skipped(skipped);

        if store.is_empty() {
            info("No events to export.");
            return Ok(());
        }

        ExportLogic::run(&store, format, file, *force)?;
    }
    Ok(())
}
