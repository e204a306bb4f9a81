//! Error taxonomy for history analysis.
//!
//! Empty history is a named result state, not an error; only caller
//! precondition violations surface here.

use chrono::NaiveDate;
use std::fmt;

/// A history series that violates the analyzer's ordering precondition.
/// Rejecting it beats silently producing wrong streak numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryError {
    /// Records are not sorted descending by date; the offending index is
    /// the first position whose date is newer than its predecessor's.
    NotDescending { index: usize, date: NaiveDate },
    /// Two records share one calendar date.
    DuplicateDate { index: usize, date: NaiveDate },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::NotDescending { index, date } => write!(
                f,
                "history not sorted descending by date: record {} ({}) is newer than its predecessor",
                index, date
            ),
            HistoryError::DuplicateDate { index, date } => write!(
                f,
                "duplicate date in history: record {} repeats {}",
                index, date
            ),
        }
    }
}

impl std::error::Error for HistoryError {}
