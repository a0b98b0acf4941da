use crate::models::event::{Event, Metrics};

/// Two-decimal rendering used for all derived metrics.
pub fn fmt2(v: f64) -> String {
    format!("{v:.2}")
}

/// One-decimal rendering for distances.
pub fn fmt1(v: f64) -> String {
    format!("{v:.1}")
}

/// Kind-specific metric column, with its unit.
pub fn metric_cell(ev: &Event) -> String {
    match ev.metrics {
        Metrics::Shopping { cost } => format!("{} usd", fmt2(cost)),
        Metrics::Exercise { calories } => format!("{} cal", fmt2(calories)),
    }
}

/// Per-hour derivation column, with its unit.
pub fn per_hour_cell(ev: &Event) -> String {
    match ev.metrics {
        Metrics::Shopping { .. } => format!("{} $/hr", fmt2(ev.metric_per_hour())),
        Metrics::Exercise { .. } => format!("{} cal/hr", fmt2(ev.metric_per_hour())),
    }
}
