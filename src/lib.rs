//! # arbormap
//!
//! Renders a batch of street-tree survey records as styled circle markers
//! for an interactive map.
//!
//! The pipeline is deliberately small: fetch one batch of records from a
//! Socrata-style open-data endpoint, derive a visual encoding (fill color
//! and opacity from the tree-health condition, radius from a quantile
//! bucketing of the trunk diameters), and collect one marker per valid
//! record into a group that a map shell can display alongside a static
//! legend.

pub mod core;
pub mod data;
pub mod encoding;
pub mod layers;
pub mod legend;
pub mod map;
pub mod render;

// Re-export public API
pub use crate::core::geo::{LatLng, LatLngBounds, TileCoord};

pub use crate::data::{
    record::TreeRecord,
    source::{FetchHandle, FetchState, SocrataSource},
};

pub use crate::encoding::{condition::Condition, quantile::QuantileScale};

pub use crate::layers::{
    group::MarkerGroup,
    marker::{CircleMarker, CircleStyle},
};

pub use crate::legend::{Legend, LegendEntry};

pub use crate::map::{BasemapSource, CartoDbSource, MapOptions, TreeMap};

pub use crate::render::{render_batch, CoordinatePolicy};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = MapError;
