use crate::cli::commands::{print_views, warn_skipped};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::slot::DbSlot;
use crate::errors::{AppError, AppResult};
use crate::models::{coords::Coords, kind::EventKind};
use crate::store::EventStore;
use crate::ui::messages::success;

/// Log a new event at a map coordinate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        lat,
        lng,
        distance,
        duration,
        cost,
        calories,
    } = cmd
    {
        //
        // 1. Resolve kind (default comes from the config)
        //
        let kind_str = kind.as_deref().unwrap_or(&cfg.default_kind);
        let kind = EventKind::from_code(kind_str).ok_or_else(|| {
            AppError::InvalidKind(format!(
                "'{kind_str}'. Use 'shopping' or 'exercise'."
            ))
        })?;

        //
        // 2. Pick the kind-specific metric
        //
        let extra = match kind {
            EventKind::Shopping => cost.ok_or_else(|| {
                AppError::Validation("Shopping events require --cost.".to_string())
            })?,
            EventKind::Exercise => calories.ok_or_else(|| {
                AppError::Validation("Exercise events require --calories.".to_string())
            })?,
        };

        //
        // 3. Open the slot and rehydrate the store
        //
        let mut slot = DbSlot::open(&cfg.database)?;
        let (mut store, skipped) = EventStore::load_from(&slot)?;
        warn_skipped(skipped);

        //
        // 4. Validate, construct, append, persist
        //
        let event = AddLogic::apply(
            &mut store,
            &mut slot,
            kind,
            Coords::new(*lat, *lng),
            *distance,
            *duration,
            extra,
        )?;

        //
        // 5. Re-render both views
        //
        print_views(&store, cfg, true);
        success(format!("Logged: {} at {}", event.description, event.coords));
    }

    Ok(())
}
