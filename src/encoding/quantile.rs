//! Quantile bucketing of trunk diameters into radius tiers.
//!
//! The scale is rebuilt from scratch for every batch of records and
//! discarded afterwards; it is never updated incrementally. Only the
//! distinct diameter values participate in computing the bucket
//! boundaries, so a batch dominated by one diameter does not drag the
//! boundaries toward it.

/// Number of radius tiers.
pub const TIER_COUNT: usize = 4;

/// Maps a diameter to one of [`TIER_COUNT`] ascending tiers with roughly
/// equal populations of distinct domain values per tier.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScale {
    /// Ascending interior cut points; empty when the domain was degenerate.
    thresholds: Vec<f64>,
}

impl QuantileScale {
    /// Builds the scale from one batch of diameter values. Duplicates and
    /// non-finite values are dropped before the quantile boundaries are
    /// computed. Never fails: an empty or single-valued domain produces a
    /// degenerate scale that maps everything to tier 1.
    pub fn from_values(values: &[f64]) -> Self {
        let mut distinct: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();

        if distinct.len() < 2 {
            return Self {
                thresholds: Vec::new(),
            };
        }

        let thresholds = (1..TIER_COUNT)
            .map(|i| quantile_sorted(&distinct, i as f64 / TIER_COUNT as f64))
            .collect();

        Self { thresholds }
    }

    /// Tier index in `1..=TIER_COUNT`. Values below the lowest boundary
    /// resolve to tier 1 and above the highest to the top tier, so inputs
    /// that were not in the domain still bucket deterministically.
    /// Non-finite inputs resolve to tier 1.
    pub fn tier(&self, value: f64) -> u8 {
        if !value.is_finite() {
            return 1;
        }
        let below = self.thresholds.iter().take_while(|t| value >= **t).count();
        below as u8 + 1
    }

    /// Render radius for a diameter: twice the tier index (2, 4, 6, 8).
    pub fn radius(&self, value: f64) -> f64 {
        f64::from(self.tier(value)) * 2.0
    }

    /// True when the domain had fewer than two distinct values.
    pub fn is_degenerate(&self) -> bool {
        self.thresholds.is_empty()
    }
}

/// Quantile of a sorted sample with linear interpolation between order
/// statistics (type R-7, the convention d3's quantile scale uses).
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    sorted[lo] + (sorted[hi] - sorted[lo]) * (h - lo as f64)
}
