use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Visual attributes of a circle marker: a filled, strokeless dot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleStyle {
    /// Fill color as a hex string, e.g. `#1a9641`
    pub fill_color: String,
    /// Fill opacity in 0.0..=1.0
    pub fill_opacity: f32,
    /// Radius in display units
    pub radius: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            fill_color: "#1a9641".to_string(),
            fill_opacity: 0.75,
            radius: 2.0,
        }
    }
}

/// A drawable point with a position, fixed visual attributes and an
/// attached description. Immutable once built; the map shell only ever
/// displays or discards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    position: LatLng,
    style: CircleStyle,
    popup_text: Option<String>,
    record_id: Option<String>,
}

impl CircleMarker {
    pub fn new(position: LatLng, style: CircleStyle) -> Self {
        Self {
            position,
            style,
            popup_text: None,
            record_id: None,
        }
    }

    pub fn with_popup(mut self, text: String) -> Self {
        self.popup_text = Some(text);
        self
    }

    /// Tags the marker with the identifier of the record it was built from
    pub fn with_record_id(mut self, id: String) -> Self {
        self.record_id = Some(id);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn style(&self) -> &CircleStyle {
        &self.style
    }

    pub fn popup_text(&self) -> Option<&str> {
        self.popup_text.as_deref()
    }

    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_builder() {
        let marker = CircleMarker::new(
            LatLng::new(40.8, -73.8),
            CircleStyle {
                fill_color: "#a6d96a".to_string(),
                fill_opacity: 0.75,
                radius: 6.0,
            },
        )
        .with_popup("Species: Quercus rubra".to_string())
        .with_record_id("180683".to_string());

        assert_eq!(marker.position(), LatLng::new(40.8, -73.8));
        assert_eq!(marker.style().fill_color, "#a6d96a");
        assert_eq!(marker.popup_text(), Some("Species: Quercus rubra"));
        assert_eq!(marker.record_id(), Some("180683"));
    }

    #[test]
    fn test_record_id_defaults_to_none() {
        let marker = CircleMarker::new(LatLng::new(40.8, -73.8), CircleStyle::default());
        assert_eq!(marker.record_id(), None);
    }
}
