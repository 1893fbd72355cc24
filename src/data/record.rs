//! Typed view of one street-tree survey row.

use serde::{Deserialize, Deserializer};

/// One input record from the dataset. Immutable once received; the
/// rendering pass that consumes the batch is its only owner.
///
/// Every field is optional because the upstream rows are sparse: trees
/// without a surveyed location simply omit the coordinate columns.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TreeRecord {
    /// Upstream row identifier
    #[serde(default)]
    pub tree_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    /// Trunk diameter in inches
    #[serde(default, deserialize_with = "lenient_f64")]
    pub diameter: Option<f64>,
    /// Raw health condition label, e.g. "Good"
    #[serde(default)]
    pub condition: Option<String>,
    /// Latin species name, opaque display string
    #[serde(default)]
    pub spc_latin: Option<String>,
}

/// Socrata serves numeric columns as JSON strings. Accept either shape and
/// treat anything unparseable as absent rather than failing the batch.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}
