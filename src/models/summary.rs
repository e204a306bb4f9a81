use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Streak statistics derived from a region's signal history.
///
/// Produced fresh by the run-length analyzer on every query; never stored.
/// `has_history == false` means the series was empty and every other field
/// is absent. `no_change_in_history == true` means the whole window shares
/// one signal, in which case `days_since_change` counts records instead of
/// calendar days (the window doesn't reach the true run start).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationChangeSummary {
    pub has_history: bool,
    pub no_change_in_history: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_signal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_signal: Option<String>,
    /// First day the current signal was observed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_change_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_change: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_signal_duration_days: Option<i64>,
}

impl AllocationChangeSummary {
    /// Summary for an empty history series. A normal state, not an error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Summary for a window whose every record shares one signal.
    pub fn stable(signal: String, record_count: usize) -> Self {
        Self {
            has_history: true,
            no_change_in_history: true,
            current_signal: Some(signal),
            days_since_change: Some(record_count as i64),
            ..Self::default()
        }
    }
}
