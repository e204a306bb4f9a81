use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One trading day's recorded momentum values and active signal.
///
/// Records are appended once per trading day by the external pipeline and
/// never mutated here; the engine only reads them. Within a region the
/// series is totally ordered by `date` with no duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub date: NaiveDate,
    /// Momentum per tracked asset ticker as of this day.
    pub momentum: HashMap<String, f64>,
    /// Threshold momentum where the region exposes it. Older records may
    /// lack it: unknown for display, zero for ranking.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub threshold_mom: Option<f64>,
    /// The ticker that held the allocation on this day.
    pub signal: String,
}
