//! History windowing for the reporting ranges.
//!
//! Ranges map to maximum record counts approximating trading days, not
//! calendar spans; the windower just takes the most recent N records of a
//! descending series and does no date arithmetic.

use crate::models::HistoryRecord;
use serde::{Deserialize, Serialize};

/// Record cap for the chart path, independent of the requested range.
pub const CHART_SPAN: usize = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryRange {
    /// ~3 months of trading days.
    #[serde(rename = "3m")]
    ShortTerm,
    /// ~1 year of trading days.
    #[serde(rename = "1y")]
    MediumTerm,
    /// Effectively all available history for most datasets.
    #[serde(rename = "max")]
    LongTerm,
}

impl HistoryRange {
    pub fn max_records(self) -> usize {
        match self {
            HistoryRange::ShortTerm => 100,
            HistoryRange::MediumTerm => 300,
            HistoryRange::LongTerm => 1000,
        }
    }
}

impl Default for HistoryRange {
    fn default() -> Self {
        HistoryRange::MediumTerm
    }
}

/// The most recent `range.max_records()` records of a descending series.
pub fn window(history: &[HistoryRecord], range: HistoryRange) -> &[HistoryRecord] {
    let n = range.max_records().min(history.len());
    &history[..n]
}

/// Further clip an already-windowed series to the fixed chart span.
/// Applied only on the chart-consuming path, never the full-table path.
pub fn chart_window(history: &[HistoryRecord]) -> &[HistoryRecord] {
    let n = CHART_SPAN.min(history.len());
    &history[..n]
}
