//! Turns one batch of records into a drawable marker group.
//!
//! The whole pass is a pure function of the batch: the quantile scale is
//! built from the batch's own diameters, each record is styled through the
//! condition and diameter encodings, and the markers come back as a value.
//! Nothing accumulates into ambient state.

use crate::{
    core::geo::LatLng,
    data::record::TreeRecord,
    encoding::{condition::Condition, quantile::QuantileScale},
    layers::{
        group::MarkerGroup,
        marker::{CircleMarker, CircleStyle},
    },
};

/// How strictly a record's coordinates are validated before rendering.
///
/// The map this crate grew out of accepted a record when *either*
/// coordinate was present, which lets a half-located record through with an
/// undefined position. `RequireBoth` is the corrected default;
/// `RequireEither` keeps the legacy behavior observable, with the absent
/// coordinate surfacing as NaN in the marker position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinatePolicy {
    /// Both latitude and longitude must be present and finite
    #[default]
    RequireBoth,
    /// At least one coordinate must be present and finite
    RequireEither,
}

/// Renders a batch of records into a marker group.
///
/// Records failing the coordinate policy are skipped; no error is raised
/// for them. Styling and bucketing are total, so every accepted record
/// yields exactly one marker.
pub fn render_batch(records: &[TreeRecord], policy: CoordinatePolicy) -> MarkerGroup {
    let diameters: Vec<f64> = records.iter().filter_map(|r| r.diameter).collect();
    let scale = QuantileScale::from_values(&diameters);

    let mut group = MarkerGroup::new();
    for record in records {
        match marker_for(record, &scale, policy) {
            Some(marker) => group.add(marker),
            None => log::debug!("skipping record without usable coordinates: {:?}", record),
        }
    }

    log::info!(
        "rendered {} of {} records into markers",
        group.len(),
        records.len()
    );
    group
}

/// Applies the coordinate policy, yielding the marker position for an
/// accepted record and `None` for a rejected one.
fn accepted_position(record: &TreeRecord, policy: CoordinatePolicy) -> Option<LatLng> {
    let lat = record.latitude.filter(|v| v.is_finite());
    let lng = record.longitude.filter(|v| v.is_finite());

    match policy {
        CoordinatePolicy::RequireBoth => Some(LatLng::new(lat?, lng?)),
        CoordinatePolicy::RequireEither => {
            if lat.is_none() && lng.is_none() {
                return None;
            }
            Some(LatLng::new(
                lat.unwrap_or(f64::NAN),
                lng.unwrap_or(f64::NAN),
            ))
        }
    }
}

fn marker_for(
    record: &TreeRecord,
    scale: &QuantileScale,
    policy: CoordinatePolicy,
) -> Option<CircleMarker> {
    let position = accepted_position(record, policy)?;
    let condition = Condition::from_label(record.condition.as_deref().unwrap_or(""));

    let style = CircleStyle {
        fill_color: condition.fill_color().to_string(),
        fill_opacity: condition.fill_opacity(),
        radius: scale.radius(record.diameter.unwrap_or(f64::NAN)),
    };

    let mut marker = CircleMarker::new(position, style).with_popup(popup_text(record, condition));
    if let Some(id) = &record.tree_id {
        marker = marker.with_record_id(id.clone());
    }
    Some(marker)
}

/// Popup body for one record: species, diameter and condition, with the
/// condition line carrying its encoding color so a styled view can tint it.
pub fn popup_text(record: &TreeRecord, condition: Condition) -> String {
    let species = record.spc_latin.as_deref().unwrap_or("Unknown species");
    let diameter = record
        .diameter
        .map(|d| format!("{} in", d))
        .unwrap_or_else(|| "unknown".to_string());
    let label = record.condition.as_deref().unwrap_or("Unknown");

    format!(
        "Species: {}\nDiameter: {}\nCondition: {} [{}]",
        species,
        diameter,
        label,
        condition.fill_color()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lat: Option<f64>, lng: Option<f64>, condition: &str, diameter: f64) -> TreeRecord {
        TreeRecord {
            latitude: lat,
            longitude: lng,
            diameter: Some(diameter),
            condition: Some(condition.to_string()),
            spc_latin: Some("QUERCUS RUBRA".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_renders_good_tree_in_tier_three() {
        // Diameters chosen so 10 lands in tier 3 of the quantile scale
        let mut batch: Vec<TreeRecord> = [2.0, 4.0, 6.0, 8.0, 12.0, 14.0, 16.0]
            .iter()
            .map(|d| record(Some(40.7), Some(-73.9), "Fair", *d))
            .collect();
        batch.push(record(Some(40.8), Some(-73.8), "Good", 10.0));

        let group = render_batch(&batch, CoordinatePolicy::RequireBoth);
        assert_eq!(group.len(), 8);

        let marker = group.markers().last().unwrap();
        assert_eq!(marker.position(), LatLng::new(40.8, -73.8));
        assert_eq!(marker.style().fill_color, "#a6d96a");
        assert_eq!(marker.style().fill_opacity, 0.75);
        assert_eq!(marker.style().radius, 6.0);
    }

    #[test]
    fn test_missing_longitude_excluded_when_both_required() {
        let batch = vec![record(Some(40.8), None, "Good", 10.0)];
        let group = render_batch(&batch, CoordinatePolicy::RequireBoth);
        assert!(group.is_empty());
    }

    #[test]
    fn test_missing_longitude_included_under_legacy_policy() {
        let batch = vec![record(Some(40.8), None, "Good", 10.0)];
        let group = render_batch(&batch, CoordinatePolicy::RequireEither);
        assert_eq!(group.len(), 1);

        // The legacy defect is preserved observably: the position is half
        // real, half NaN.
        let position = group.markers()[0].position();
        assert_eq!(position.lat, 40.8);
        assert!(position.lng.is_nan());
    }

    #[test]
    fn test_fully_unlocated_record_excluded_under_both_policies() {
        let batch = vec![record(None, None, "Good", 10.0)];
        assert!(render_batch(&batch, CoordinatePolicy::RequireBoth).is_empty());
        assert!(render_batch(&batch, CoordinatePolicy::RequireEither).is_empty());
    }

    #[test]
    fn test_non_finite_coordinates_treated_as_absent() {
        let batch = vec![record(Some(f64::NAN), Some(-73.8), "Good", 10.0)];
        assert!(render_batch(&batch, CoordinatePolicy::RequireBoth).is_empty());
        assert_eq!(
            render_batch(&batch, CoordinatePolicy::RequireEither).len(),
            1
        );
    }

    #[test]
    fn test_unknown_condition_fades_marker() {
        let batch = vec![record(Some(40.8), Some(-73.8), "Unknown", 5.0)];
        let group = render_batch(&batch, CoordinatePolicy::RequireBoth);
        let style = group.markers()[0].style();
        assert_eq!(style.fill_opacity, 0.25);
        assert_eq!(style.fill_color, "#80cdc1");
    }

    #[test]
    fn test_missing_condition_styles_like_unrecognized_label() {
        let mut batch = vec![record(Some(40.8), Some(-73.8), "", 5.0)];
        batch[0].condition = None;

        let group = render_batch(&batch, CoordinatePolicy::RequireBoth);
        let style = group.markers()[0].style();
        assert_eq!(style.fill_color, "#80cdc1");
        assert_eq!(style.fill_opacity, 0.75);
    }

    #[test]
    fn test_popup_text_contents() {
        let rec = record(Some(40.8), Some(-73.8), "Good", 10.0);
        let text = popup_text(&rec, Condition::Good);
        assert!(text.contains("Species: QUERCUS RUBRA"));
        assert!(text.contains("Diameter: 10 in"));
        assert!(text.contains("Condition: Good [#a6d96a]"));
    }

    #[test]
    fn test_marker_carries_source_record_id() {
        let mut rec = record(Some(40.8), Some(-73.8), "Good", 10.0);
        rec.tree_id = Some("180683".to_string());

        let group = render_batch(&[rec], CoordinatePolicy::RequireBoth);
        assert_eq!(group.markers()[0].record_id(), Some("180683"));

        let anonymous = record(Some(40.8), Some(-73.8), "Good", 10.0);
        let group = render_batch(&[anonymous], CoordinatePolicy::RequireBoth);
        assert_eq!(group.markers()[0].record_id(), None);
    }

    #[test]
    fn test_missing_diameter_still_renders() {
        let mut rec = record(Some(40.8), Some(-73.8), "Good", 10.0);
        rec.diameter = None;

        let group = render_batch(&[rec], CoordinatePolicy::RequireBoth);
        assert_eq!(group.len(), 1);
        // Degenerate scale plus absent diameter resolves to the smallest tier
        assert_eq!(group.markers()[0].style().radius, 2.0);
    }
}
