//! High-level business logic for the `add` command.

use crate::core::validate::require_positive;
use crate::errors::AppResult;
use crate::models::{coords::Coords, event::Event, kind::EventKind};
use crate::store::{EventStore, SnapshotSlot};

pub struct AddLogic;

impl AddLogic {
    /// Validate, construct, append and persist one event. Validation
    /// failures happen before any `Event` exists, so a rejected
    /// submission leaves both the store and the slot untouched.
    pub fn apply(
        store: &mut EventStore,
        slot: &mut dyn SnapshotSlot,
        kind: EventKind,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
    ) -> AppResult<Event> {
        let extra_name = match kind {
            EventKind::Shopping => "cost",
            EventKind::Exercise => "calories",
        };
        require_positive(&[
            ("distance", distance_km),
            ("duration", duration_min),
            (extra_name, extra),
        ])?;

        let event = match kind {
            EventKind::Shopping => Event::shopping(coords, distance_km, duration_min, extra),
            EventKind::Exercise => Event::exercise(coords, distance_km, duration_min, extra),
        };

        store.append(event.clone());
        store.persist_to(slot)?;
        Ok(event)
    }
}
