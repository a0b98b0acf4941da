//! High-level business logic for the `clear` command.

use crate::errors::AppResult;
use crate::store::{EventStore, SnapshotSlot};

pub struct ClearLogic;

impl ClearLogic {
    /// Empty the store and the persisted snapshot together.
    pub fn apply(store: &mut EventStore, slot: &mut dyn SnapshotSlot) -> AppResult<()> {
        store.clear_all(slot)
    }
}
