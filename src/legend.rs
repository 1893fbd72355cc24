//! Static legend explaining the condition color encoding.

use crate::encoding::condition::Condition;

/// One legend row: a category label and its swatch color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// Ordered list of category/color pairs, built once at startup and
/// independent of any fetched data.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    title: String,
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// One entry per named condition, in fixed severity order. The entries
    /// use the same color lookup as the markers, so legend and map can
    /// never disagree.
    pub fn conditions(title: impl Into<String>) -> Self {
        let entries = Condition::NAMED
            .iter()
            .map(|condition| LegendEntry {
                label: condition.label(),
                color: condition.fill_color(),
            })
            .collect();

        Self {
            title: title.into(),
            entries,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}
