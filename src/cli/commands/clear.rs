use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clear::ClearLogic;
use crate::db::slot::DbSlot;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !yes {
            warning("This deletes every logged event. Re-run with --yes to confirm.");
            return Ok(());
        }

        let mut slot = DbSlot::open(&cfg.database)?;
        let (mut store, _) = EventStore::load_from(&slot)?;

        ClearLogic::apply(&mut store, &mut slot)?;
        success("All events cleared.");
    }
    Ok(())
}
