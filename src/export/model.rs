use crate::models::event::Event;
use serde::Serialize;

/// Flat export row, one per event in store order.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: String,
    pub kind: String,
    pub created_at: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
    pub duration_min: f64,
    pub metric: f64,
    pub metric_per_hour: f64,
    pub description: String,
}

impl From<&Event> for EventExport {
    fn from(ev: &Event) -> Self {
        Self {
            id: ev.id.clone(),
            kind: ev.kind().as_str().to_string(),
            created_at: ev.created_at.to_rfc3339(),
            lat: ev.coords.lat,
            lng: ev.coords.lng,
            distance_km: ev.distance_km,
            duration_min: ev.duration_min,
            metric: ev.cost().or(ev.calories()).unwrap_or(0.0),
            metric_per_hour: ev.metric_per_hour(),
            description: ev.description.clone(),
        }
    }
}
