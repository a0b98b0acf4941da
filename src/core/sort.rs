//! Sort controller.
//!
//! The direction to apply is decided by inspecting the store's current
//! order, not any remembered state: the live field values are compared
//! element-wise against the ascending and descending sorts of the same
//! multiset. Values are compared as numbers throughout; concatenating
//! them into strings would let sequences like `[10]` and `[1, 0]`
//! collide.

use crate::errors::AppResult;
use crate::models::event::Event;
use crate::store::{Direction, EventStore, SnapshotSlot};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Distance,
    Duration,
    Cost,
    Calories,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Distance => "distance",
            SortField::Duration => "duration",
            SortField::Cost => "cost",
            SortField::Calories => "calories",
        }
    }
}

/// Numeric projection of an event onto a sort field. An event without
/// the kind-specific metric projects as 0.0, so foreign-kind events
/// group at the small end of the ordering.
pub fn field_value(ev: &Event, field: SortField) -> f64 {
    match field {
        SortField::Distance => ev.distance_km,
        SortField::Duration => ev.duration_min,
        SortField::Cost => ev.cost().unwrap_or(0.0),
        SortField::Calories => ev.calories().unwrap_or(0.0),
    }
}

/// Classify the live ordering. A fully descending sequence (including
/// the all-equal case) reads as descending; fully ascending reads as
/// ascending; anything else defaults to descending, so the first sort
/// of an unsorted store comes out ascending.
pub fn detect_direction(values: &[f64]) -> Direction {
    let mut ascending = values.to_vec();
    ascending.sort_by(f64::total_cmp);
    let descending: Vec<f64> = ascending.iter().rev().copied().collect();

    if same_sequence(values, &descending) {
        Direction::Descending
    } else if same_sequence(values, &ascending) {
        Direction::Ascending
    } else {
        Direction::Descending
    }
}

fn same_sequence(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.total_cmp(y).is_eq())
}

pub struct SortLogic;

impl SortLogic {
    /// Toggle: sort opposite to the detected current direction, persist
    /// the new order, and report the direction that was applied. The
    /// caller re-renders both views afterwards.
    pub fn apply(
        store: &mut EventStore,
        slot: &mut dyn SnapshotSlot,
        field: SortField,
    ) -> AppResult<Direction> {
        let values: Vec<f64> = store.iter().map(|e| field_value(e, field)).collect();
        let direction = detect_direction(&values).flipped();

        store.sort_by_key(direction, |e| field_value(e, field));
        store.persist_to(slot)?;
        Ok(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::coords::Coords;
    use crate::store::MemorySlot;

    fn store_with_distances(distances: &[f64]) -> EventStore {
        let mut store = EventStore::new();
        for &d in distances {
            store.append(Event::shopping(Coords::new(0.0, 0.0), d, 30.0, 10.0));
        }
        store
    }

    fn distances(store: &EventStore) -> Vec<f64> {
        store.iter().map(|e| e.distance_km).collect()
    }

    #[test]
    fn detects_ascending_and_descending() {
        assert_eq!(detect_direction(&[1.0, 3.0, 5.0]), Direction::Ascending);
        assert_eq!(detect_direction(&[5.0, 3.0, 1.0]), Direction::Descending);
    }

    #[test]
    fn unsorted_defaults_to_descending() {
        assert_eq!(detect_direction(&[5.0, 1.0, 3.0]), Direction::Descending);
    }

    #[test]
    fn all_equal_reads_as_descending() {
        assert_eq!(detect_direction(&[2.0, 2.0, 2.0]), Direction::Descending);
    }

    #[test]
    fn compares_numerically_not_as_strings() {
        // "2" + "10" and its ascending sort concatenate identically as
        // strings; numerically this sequence is plainly unsorted.
        assert_eq!(detect_direction(&[21.0, 2.0, 10.0]), Direction::Descending);
        assert_eq!(detect_direction(&[2.0, 10.0]), Direction::Ascending);
    }

    #[test]
    fn first_sort_is_ascending_then_toggles() {
        let mut store = store_with_distances(&[5.0, 1.0, 3.0]);
        let mut slot = MemorySlot::default();

        let applied = SortLogic::apply(&mut store, &mut slot, SortField::Distance).unwrap();
        assert_eq!(applied, Direction::Ascending);
        assert_eq!(distances(&store), vec![1.0, 3.0, 5.0]);

        let applied = SortLogic::apply(&mut store, &mut slot, SortField::Distance).unwrap();
        assert_eq!(applied, Direction::Descending);
        assert_eq!(distances(&store), vec![5.0, 3.0, 1.0]);

        let applied = SortLogic::apply(&mut store, &mut slot, SortField::Distance).unwrap();
        assert_eq!(applied, Direction::Ascending);
        assert_eq!(distances(&store), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn sorted_order_is_persisted() {
        let mut store = store_with_distances(&[5.0, 1.0]);
        let mut slot = MemorySlot::default();
        SortLogic::apply(&mut store, &mut slot, SortField::Distance).unwrap();

        let (reloaded, _) = EventStore::load_from(&slot).unwrap();
        assert_eq!(distances(&reloaded), vec![1.0, 5.0]);
    }

    #[test]
    fn missing_metric_projects_as_zero() {
        let ev = Event::exercise(Coords::new(0.0, 0.0), 1.0, 60.0, 300.0);
        assert_eq!(field_value(&ev, SortField::Cost), 0.0);
        assert_eq!(field_value(&ev, SortField::Calories), 300.0);
    }
}
