use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Shopping,
    Exercise,
}

impl EventKind {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shopping" => Some(Self::Shopping),
            "exercise" => Some(Self::Exercise),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Shopping => "shopping",
            EventKind::Exercise => "exercise",
        }
    }

    /// Capitalized label used in event descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Shopping => "Shopping",
            EventKind::Exercise => "Exercise",
        }
    }

    /// Icon shown next to markers and list rows.
    pub fn icon(&self) -> &'static str {
        match self {
            EventKind::Shopping => "🛒",
            EventKind::Exercise => "🏃",
        }
    }

    /// Style class for the marker popup, keyed by kind.
    pub fn marker_class(&self) -> &'static str {
        match self {
            EventKind::Shopping => "shopping-popup",
            EventKind::Exercise => "exercise-popup",
        }
    }

    pub fn is_shopping(&self) -> bool {
        matches!(self, EventKind::Shopping)
    }

    pub fn is_exercise(&self) -> bool {
        matches!(self, EventKind::Exercise)
    }
}
