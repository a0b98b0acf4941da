use super::{coords::Coords, kind::EventKind};
use crate::utils::date::month_name;
use chrono::{DateTime, Datelike, Local};
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide sequence appended to timestamp-derived ids. Two events
/// created in the same millisecond still get distinct ids.
static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// Kind-specific fields. Exactly one arm per event kind; the arm is the
/// discriminator, there is no separate type tag to keep in sync.
#[derive(Debug, Clone, PartialEq)]
pub enum Metrics {
    Shopping { cost: f64 },
    Exercise { calories: f64 },
}

impl Metrics {
    pub fn kind(&self) -> EventKind {
        match self {
            Metrics::Shopping { .. } => EventKind::Shopping,
            Metrics::Exercise { .. } => EventKind::Exercise,
        }
    }
}

/// A logged shopping trip or exercise session, pinned to a coordinate.
///
/// All fields are set once at construction and never mutated; in
/// particular `description` is derived from the creation timestamp
/// exactly once and survives snapshot round-trips verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub created_at: DateTime<Local>,
    pub coords: Coords,
    pub distance_km: f64,
    pub duration_min: f64,
    pub description: String,
    pub metrics: Metrics,
}

impl Event {
    /// New shopping trip. Inputs are assumed pre-validated (finite and
    /// strictly positive); validation happens upstream.
    pub fn shopping(coords: Coords, distance_km: f64, duration_min: f64, cost: f64) -> Self {
        Self::build(coords, distance_km, duration_min, Metrics::Shopping { cost })
    }

    /// New exercise session. Same pre-validation contract as `shopping`.
    pub fn exercise(coords: Coords, distance_km: f64, duration_min: f64, calories: f64) -> Self {
        Self::build(coords, distance_km, duration_min, Metrics::Exercise { calories })
    }

    fn build(coords: Coords, distance_km: f64, duration_min: f64, metrics: Metrics) -> Self {
        let created_at = Local::now();
        Self {
            id: next_id(&created_at),
            description: describe(metrics.kind(), &created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            metrics,
        }
    }

    /// Rebuild an event from already-persisted fields. Used only by
    /// snapshot rehydration; nothing is derived here.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: String,
        created_at: DateTime<Local>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        description: String,
        metrics: Metrics,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            description,
            metrics,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.metrics.kind()
    }

    pub fn cost(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Shopping { cost } => Some(cost),
            Metrics::Exercise { .. } => None,
        }
    }

    pub fn calories(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Exercise { calories } => Some(calories),
            Metrics::Shopping { .. } => None,
        }
    }

    /// Kind-specific metric normalized per hour: cost/hour for shopping,
    /// calories/hour for exercise. Pure function of stored fields,
    /// recomputed on every call.
    pub fn metric_per_hour(&self) -> f64 {
        let metric = match self.metrics {
            Metrics::Shopping { cost } => cost,
            Metrics::Exercise { calories } => calories,
        };
        metric / (self.duration_min / 60.0)
    }

    pub fn cost_per_hour(&self) -> Option<f64> {
        self.cost().map(|_| self.metric_per_hour())
    }

    pub fn calories_per_hour(&self) -> Option<f64> {
        self.calories().map(|_| self.metric_per_hour())
    }
}

/// `"{Capitalized kind} on {MonthName} {Day}"`, computed once at
/// construction time.
fn describe(kind: EventKind, at: &DateTime<Local>) -> String {
    format!("{} on {} {}", kind.label(), month_name(at.month0() as usize), at.day())
}

fn next_id(created_at: &DateTime<Local>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(10)..];
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed) % 1000;
    format!("{tail}{seq:03}")
}
