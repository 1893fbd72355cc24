use crate::core::geo::LatLngBounds;
use crate::layers::marker::CircleMarker;

/// Ordered collection of markers produced by one rendering pass.
///
/// The group is built as a plain value and handed to the map shell in one
/// piece, so there is never a moment where the shell can observe a
/// partially rendered batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerGroup {
    markers: Vec<CircleMarker>,
}

impl MarkerGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a marker, preserving input order
    pub fn add(&mut self, marker: CircleMarker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Smallest bounds enclosing every marker position, or `None` for an
    /// empty group
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let positions: Vec<_> = self.markers.iter().map(|m| m.position()).collect();
        LatLngBounds::from_points(&positions)
    }
}

impl IntoIterator for MarkerGroup {
    type Item = CircleMarker;
    type IntoIter = std::vec::IntoIter<CircleMarker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.into_iter()
    }
}
