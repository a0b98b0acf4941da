//! Presentation sync: rebuilds the list table and the marker set from
//! the store's current order.
//!
//! Both views are always rebuilt from scratch. Incremental patching
//! would leave stale markers behind after a reorder, so there is none.

pub mod map;

use crate::models::event::Event;
use crate::store::EventStore;
use crate::utils::formatting::{fmt1, fmt2, metric_cell, per_hour_cell};
use crate::utils::table::{Column, Table};
use map::MapSurface;

/// Rebuild the marker view: every marker is removed and recreated in
/// store order, one per event.
pub fn sync_markers(store: &EventStore, surface: &mut dyn MapSurface) {
    surface.clear_markers();
    for ev in store.iter() {
        surface.add_marker(ev.coords, &marker_popup(ev), ev.kind().marker_class());
    }
}

/// Popup content for one marker: `{icon} {description}`.
pub fn marker_popup(ev: &Event) -> String {
    format!("{} {}", ev.kind().icon(), ev.description)
}

/// Rebuild the list view as a table, one row per event in store order.
pub fn render_list(store: &EventStore) -> String {
    let mut table = Table::new(vec![
        Column::left("", 2),
        Column::left("DESCRIPTION", 24),
        Column::right("KM", 7),
        Column::right("MIN", 7),
        Column::right("METRIC", 12),
        Column::right("PER HOUR", 13),
    ]);

    for ev in store.iter() {
        table.add_row(vec![
            ev.kind().icon().to_string(),
            ev.description.clone(),
            fmt1(ev.distance_km),
            fmt2(ev.duration_min),
            metric_cell(ev),
            per_hour_cell(ev),
        ]);
    }

    table.render()
}
