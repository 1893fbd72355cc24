//! Color and opacity encoding of the tree-health condition.
//!
//! The survey labels a tree with one of seven condition values. Colors come
//! from a fixed 5-step diverging ramp over the severity ordering
//! Excellent > Good > Fair > Poor > Dead, with Stump sharing Dead's color.
//! Labels outside the known set are never an error; they style like any
//! other label but with a fallback color distinct from the ramp.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diverging health ramp, worst to best.
const HEALTH_COLORS: [&str; 5] = ["#d7191c", "#fdae61", "#ffffbf", "#a6d96a", "#1a9641"];

/// Color for labels outside the named set, distinct from every ramp color.
pub const FALLBACK_COLOR: &str = "#80cdc1";

/// Tree-health condition category.
///
/// `Other` absorbs every label the survey vocabulary doesn't define, so
/// converting from a raw string is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
    Dead,
    Stump,
    Unknown,
    Other,
}

impl Condition {
    /// The named categories in legend order.
    pub const NAMED: [Condition; 7] = [
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
        Condition::Dead,
        Condition::Stump,
        Condition::Unknown,
    ];

    /// Maps a raw survey label to a category. Matching is exact and
    /// case-sensitive, as the dataset spells these consistently.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Excellent" => Condition::Excellent,
            "Good" => Condition::Good,
            "Fair" => Condition::Fair,
            "Poor" => Condition::Poor,
            "Dead" => Condition::Dead,
            "Stump" => Condition::Stump,
            "Unknown" => Condition::Unknown,
            _ => Condition::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
            Condition::Dead => "Dead",
            Condition::Stump => "Stump",
            Condition::Unknown => "Unknown",
            Condition::Other => "Other",
        }
    }

    /// Fill color hex value for markers and the legend.
    pub fn fill_color(&self) -> &'static str {
        match self {
            Condition::Excellent => HEALTH_COLORS[4],
            Condition::Good => HEALTH_COLORS[3],
            Condition::Fair => HEALTH_COLORS[2],
            Condition::Poor => HEALTH_COLORS[1],
            Condition::Dead | Condition::Stump => HEALTH_COLORS[0],
            Condition::Unknown | Condition::Other => FALLBACK_COLOR,
        }
    }

    /// Fill opacity: trees of unknown condition fade back, everything else
    /// draws at the same strength.
    pub fn fill_opacity(&self) -> f32 {
        match self {
            Condition::Unknown => 0.25,
            _ => 0.75,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
