//! Slim map shell: view state, a tile basemap source, rendered marker
//! groups and the legend. The drawable surface itself is an external
//! collaborator; this shell only owns what gets drawn.

use crate::core::geo::{LatLng, LatLngBounds, TileCoord};
use crate::layers::group::MarkerGroup;
use crate::legend::Legend;

/// Initial view of the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for MapOptions {
    /// The Bronx view the original tree map opened on
    fn default() -> Self {
        Self {
            center: LatLng::new(40.841156, -73.883678),
            zoom: 12,
        }
    }
}

/// Trait representing anything that can produce basemap tile URLs.
pub trait BasemapSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;

    /// Attribution line to display with the tiles.
    fn attribution(&self) -> &str {
        ""
    }
}

/// CartoDB light (no labels) raster tiles, a quiet backdrop for the
/// colored markers.
pub struct CartoDbSource {
    subdomains: Vec<&'static str>,
}

impl CartoDbSource {
    pub fn new() -> Self {
        Self {
            subdomains: vec!["a", "b", "c"],
        }
    }
}

impl Default for CartoDbSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BasemapSource for CartoDbSource {
    fn url(&self, coord: TileCoord) -> String {
        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        let sub = self.subdomains[idx];
        format!(
            "https://{}.basemaps.cartocdn.com/light_nolabels/{}/{}/{}.png",
            sub, coord.z, coord.x, coord.y
        )
    }

    fn attribution(&self) -> &str {
        "Map Data © OpenStreetMap Contributors, Map Tiles © CartoDB"
    }
}

/// Owns everything one tree map displays.
pub struct TreeMap {
    options: MapOptions,
    basemap: Box<dyn BasemapSource>,
    groups: Vec<MarkerGroup>,
    legend: Legend,
}

impl TreeMap {
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            basemap: Box::new(CartoDbSource::new()),
            groups: Vec::new(),
            legend: Legend::conditions("Tree Health"),
        }
    }

    pub fn with_basemap(mut self, basemap: Box<dyn BasemapSource>) -> Self {
        self.basemap = basemap;
        self
    }

    pub fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.options.center = center;
        self.options.zoom = zoom;
    }

    pub fn center(&self) -> LatLng {
        self.options.center
    }

    pub fn zoom(&self) -> u8 {
        self.options.zoom
    }

    /// Adds one fully rendered marker group to the display list
    pub fn add_group(&mut self, group: MarkerGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[MarkerGroup] {
        &self.groups
    }

    pub fn marker_count(&self) -> usize {
        self.groups.iter().map(MarkerGroup::len).sum()
    }

    /// Smallest bounds enclosing every marker across all groups, or `None`
    /// when nothing has been added yet. Handy for fitting the view to the
    /// fetched data.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.groups
            .iter()
            .filter_map(MarkerGroup::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn basemap(&self) -> &dyn BasemapSource {
        self.basemap.as_ref()
    }

    /// Tile coordinate of the current view center, handy for priming a
    /// tile cache around the initial viewport
    pub fn center_tile(&self) -> TileCoord {
        TileCoord::from_lat_lng(&self.options.center, self.options.zoom)
    }
}
