//! Flat persisted form of an event.
//!
//! The snapshot slot stores a JSON array of these records. Rehydration
//! re-selects the typed variant from the `kind` discriminator; a record
//! with an unknown kind or a missing kind-specific metric fails on its
//! own and is skipped by the store, leaving the rest of the snapshot
//! intact.

use super::coords::Coords;
use super::event::{Event, Metrics};
use super::kind::EventKind;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub kind: String,
    pub coords: [f64; 2],
    pub distance: f64,
    pub duration_minutes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    pub id: String,
    pub created_at: String,
    pub description: String,
}

impl From<&Event> for SnapshotRecord {
    fn from(ev: &Event) -> Self {
        Self {
            kind: ev.kind().as_str().to_string(),
            coords: ev.coords.into(),
            distance: ev.distance_km,
            duration_minutes: ev.duration_min,
            cost: ev.cost(),
            calories: ev.calories(),
            id: ev.id.clone(),
            created_at: ev.created_at.to_rfc3339(),
            description: ev.description.clone(),
        }
    }
}

impl SnapshotRecord {
    /// Rebuild the typed event this record was serialized from.
    pub fn rehydrate(&self) -> AppResult<Event> {
        let kind = EventKind::from_code(&self.kind)
            .ok_or_else(|| AppError::Snapshot(format!("unknown kind '{}'", self.kind)))?;

        let metrics = match kind {
            EventKind::Shopping => Metrics::Shopping {
                cost: self
                    .cost
                    .ok_or_else(|| AppError::Snapshot("shopping record without cost".into()))?,
            },
            EventKind::Exercise => Metrics::Exercise {
                calories: self
                    .calories
                    .ok_or_else(|| AppError::Snapshot("exercise record without calories".into()))?,
            },
        };

        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| AppError::Snapshot(format!("bad createdAt '{}': {e}", self.created_at)))?
            .with_timezone(&Local);

        Ok(Event::from_parts(
            self.id.clone(),
            created_at,
            Coords::from(self.coords),
            self.distance,
            self.duration_minutes,
            self.description.clone(),
            metrics,
        ))
    }
}
