pub mod d400_community_summary;
pub mod d401_activity_report;

use serde::{Deserialize, Serialize};

/// One labelled count in a report table or chart bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRow {
    pub label: String,
    pub count: usize,
}

impl CountRow {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }

    /// Share of `total` in whole percent, 0 when `total` is 0.
    pub fn percent_of(&self, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        ((self.count as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Rows for every value of `C`, zero counts included, in declaration order.
pub(crate) fn count_choices<C, T>(items: &[T], key: impl Fn(&T) -> C) -> Vec<CountRow>
where
    C: crate::domain::common::Choice,
{
    C::all()
        .iter()
        .map(|c| CountRow::new(c.label(), items.iter().filter(|i| key(i) == *c).count()))
        .collect()
}
