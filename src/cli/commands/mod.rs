pub mod add;
pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod sort;

use crate::config::Config;
use crate::core::position::{ConfigLocator, Locator};
use crate::render;
use crate::render::map::{MapSurface, TextMap};
use crate::store::EventStore;
use crate::ui::messages::{info, warning};

/// Rebuild and print the two views from the store's current order.
/// The list always renders; the marker view only with `with_map`.
pub(crate) fn print_views(store: &EventStore, cfg: &Config, with_map: bool) {
    if store.is_empty() {
        info("No events logged yet.");
        return;
    }

    println!("{}", render::render_list(store));

    if with_map {
        let mut surface = TextMap::new();
        render::sync_markers(store, &mut surface);
        match ConfigLocator::new(cfg).current_position() {
            Ok(center) => surface.set_view(center, cfg.map_zoom),
            Err(e) => warning(format!("{e}; rendering without a map center")),
        }
        println!("{}", surface.render());
    }
}

/// Warn when snapshot records had to be skipped during rehydration.
pub(crate) fn warn_skipped(skipped: usize) {
    if skipped > 0 {
        warning(format!(
            "Skipped {skipped} malformed snapshot record(s); the rest were loaded."
        ));
    }
}
