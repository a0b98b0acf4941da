//! Narrow interface over the mapping collaborator.
//!
//! The real product would back this with a tile-rendering widget; the
//! CLI ships `TextMap`, a text surface that records markers and the
//! current view and prints them.

use crate::models::coords::Coords;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coords: Coords,
    pub popup: String,
    pub class: String,
}

pub trait MapSurface {
    /// Remove every marker from the surface.
    fn clear_markers(&mut self);

    /// Place one marker with its popup content and style class.
    fn add_marker(&mut self, coords: Coords, popup: &str, class: &str);

    /// Center the surface on `center` at the given zoom level.
    fn set_view(&mut self, center: Coords, zoom: u8);

    fn markers(&self) -> &[Marker];

    fn view(&self) -> Option<(Coords, u8)>;
}

#[derive(Default)]
pub struct TextMap {
    markers: Vec<Marker>,
    view: Option<(Coords, u8)>,
}

impl TextMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        match self.view {
            Some((center, zoom)) => {
                out.push_str(&format!("MAP center {center} zoom {zoom}\n"));
            }
            None => out.push_str("MAP (no center)\n"),
        }
        for m in &self.markers {
            out.push_str(&format!("  {} @ {} [{}]\n", m.popup, m.coords, m.class));
        }
        out
    }
}

impl MapSurface for TextMap {
    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn add_marker(&mut self, coords: Coords, popup: &str, class: &str) {
        self.markers.push(Marker {
            coords,
            popup: popup.to_string(),
            class: class.to_string(),
        });
    }

    fn set_view(&mut self, center: Coords, zoom: u8) {
        self.view = Some((center, zoom));
    }

    fn markers(&self) -> &[Marker] {
        &self.markers
    }

    fn view(&self) -> Option<(Coords, u8)> {
        self.view
    }
}
