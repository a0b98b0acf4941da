//! In-memory ordered event collection plus snapshot synchronization.
//!
//! The store owns the only live copy of the events; the persisted copy
//! is a plain JSON array of flat records in a key-value slot with no
//! back-reference to the in-memory objects.

use crate::errors::AppResult;
use crate::models::{event::Event, snapshot::SnapshotRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }
}

/// Key-value slot holding the serialized snapshot. The production
/// implementation lives in `crate::db`; tests use `MemorySlot`.
pub trait SnapshotSlot {
    fn set(&mut self, payload: &str) -> AppResult<()>;
    fn get(&self) -> AppResult<Option<String>>;
    fn clear(&mut self) -> AppResult<()>;
}

/// In-memory slot for unit tests.
#[derive(Default)]
pub struct MemorySlot {
    payload: Option<String>,
}

impl SnapshotSlot for MemorySlot {
    fn set(&mut self, payload: &str) -> AppResult<()> {
        self.payload = Some(payload.to_string());
        Ok(())
    }

    fn get(&self) -> AppResult<Option<String>> {
        Ok(self.payload.clone())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.payload = None;
        Ok(())
    }
}

#[derive(Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Append at the end, keeping insertion order. The caller persists
    /// afterwards.
    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Stable sort on a numeric projection of each event. Equal keys
    /// keep their current relative order.
    pub fn sort_by_key<F>(&mut self, direction: Direction, key: F)
    where
        F: Fn(&Event) -> f64,
    {
        self.events.sort_by(|a, b| {
            let ord = key(a).total_cmp(&key(b));
            match direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        });
    }

    /// Empty the store and erase the persisted snapshot together. The
    /// slot is cleared first so a persistence failure leaves the
    /// in-memory events untouched.
    pub fn clear_all(&mut self, slot: &mut dyn SnapshotSlot) -> AppResult<()> {
        slot.clear()?;
        self.events.clear();
        Ok(())
    }

    /// Serialize the current order into the slot.
    pub fn persist_to(&self, slot: &mut dyn SnapshotSlot) -> AppResult<()> {
        let records: Vec<SnapshotRecord> = self.events.iter().map(SnapshotRecord::from).collect();
        let payload = serde_json::to_string(&records)
            .map_err(|e| crate::errors::AppError::Snapshot(e.to_string()))?;
        slot.set(&payload)
    }

    /// Rehydrate from the slot. An absent slot yields an empty store.
    /// Returns the store plus the number of individually skipped
    /// records.
    pub fn load_from(slot: &dyn SnapshotSlot) -> AppResult<(Self, usize)> {
        match slot.get()? {
            None => Ok((Self::new(), 0)),
            Some(payload) => Ok(Self::from_snapshot_json(&payload)),
        }
    }

    /// Rehydrate from raw JSON. An unparseable payload yields an empty
    /// store; a record that fails on its own is skipped and counted,
    /// the rest survive.
    pub fn from_snapshot_json(payload: &str) -> (Self, usize) {
        let records: Vec<SnapshotRecord> = match serde_json::from_str(payload) {
            Ok(records) => records,
            Err(_) => return (Self::new(), 0),
        };

        let mut store = Self::new();
        let mut skipped = 0;
        for record in &records {
            match record.rehydrate() {
                Ok(ev) => store.events.push(ev),
                Err(_) => skipped += 1,
            }
        }
        (store, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::coords::Coords;

    fn shopping(distance: f64, cost: f64) -> Event {
        Event::shopping(Coords::new(10.0, 20.0), distance, 30.0, cost)
    }

    fn distances(store: &EventStore) -> Vec<f64> {
        store.iter().map(|e| e.distance_km).collect()
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = EventStore::new();
        store.append(shopping(5.0, 1.0));
        store.append(shopping(1.0, 2.0));
        store.append(shopping(3.0, 3.0));
        assert_eq!(distances(&store), vec![5.0, 1.0, 3.0]);
    }

    #[test]
    fn sorts_ascending_and_descending() {
        let mut store = EventStore::new();
        for d in [5.0, 1.0, 3.0] {
            store.append(shopping(d, 1.0));
        }
        store.sort_by_key(Direction::Ascending, |e| e.distance_km);
        assert_eq!(distances(&store), vec![1.0, 3.0, 5.0]);
        store.sort_by_key(Direction::Descending, |e| e.distance_km);
        assert_eq!(distances(&store), vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut store = EventStore::new();
        store.append(shopping(2.0, 10.0));
        store.append(shopping(2.0, 20.0));
        store.append(shopping(1.0, 30.0));
        store.sort_by_key(Direction::Ascending, |e| e.distance_km);
        let costs: Vec<f64> = store.iter().map(|e| e.cost().unwrap()).collect();
        // the two distance-2 events stay in their original order
        assert_eq!(costs, vec![30.0, 10.0, 20.0]);
    }

    #[test]
    fn persists_and_reloads_through_a_slot() {
        let mut slot = MemorySlot::default();
        let mut store = EventStore::new();
        store.append(shopping(5.0, 15.0));
        store.append(Event::exercise(Coords::new(1.0, 2.0), 3.0, 60.0, 400.0));
        store.persist_to(&mut slot).unwrap();

        let (loaded, skipped) = EventStore::load_from(&slot).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.events(), store.events());
    }

    #[test]
    fn absent_slot_loads_an_empty_store() {
        let slot = MemorySlot::default();
        let (store, skipped) = EventStore::load_from(&slot).unwrap();
        assert!(store.is_empty());
        assert_eq!(skipped, 0);
    }

    #[test]
    fn unparseable_payload_loads_an_empty_store() {
        let (store, skipped) = EventStore::from_snapshot_json("not json");
        assert!(store.is_empty());
        assert_eq!(skipped, 0);
    }

    #[test]
    fn bad_records_are_skipped_individually() {
        let mut slot = MemorySlot::default();
        let mut store = EventStore::new();
        store.append(shopping(5.0, 15.0));
        store.append(shopping(2.0, 8.0));
        store.persist_to(&mut slot).unwrap();

        // corrupt the first record's discriminator in place
        let payload = slot.get().unwrap().unwrap().replacen("shopping", "swimming", 1);
        let (loaded, skipped) = EventStore::from_snapshot_json(&payload);
        assert_eq!(skipped, 1);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.events()[0].distance_km, 2.0);
    }

    #[test]
    fn clear_all_empties_store_and_slot() {
        let mut slot = MemorySlot::default();
        let mut store = EventStore::new();
        store.append(shopping(5.0, 15.0));
        store.persist_to(&mut slot).unwrap();

        store.clear_all(&mut slot).unwrap();
        assert!(store.is_empty());
        assert_eq!(slot.get().unwrap(), None);

        let (reloaded, _) = EventStore::load_from(&slot).unwrap();
        assert!(reloaded.is_empty());
    }
}
