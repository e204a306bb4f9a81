//! Run-length analysis over the signal history.
//!
//! Finds the most recent shift boundary in a descending series and derives
//! the current-streak and previous-streak statistics. The caller supplies
//! the ordering; this module validates it instead of re-sorting, because
//! re-sorting a series with duplicate dates has no well-defined answer.

use crate::models::{AllocationChangeSummary, HistoryRecord};
use crate::signals::error::HistoryError;
use chrono::{NaiveDate, Utc};

/// Analyze `history` against today's date.
pub fn analyze(history: &[HistoryRecord]) -> Result<AllocationChangeSummary, HistoryError> {
    analyze_at(history, Utc::now().date_naive())
}

/// Analyze a descending-by-date series, computing day counts against
/// `today`. Deterministic for a fixed `today`, which is what the tests use.
pub fn analyze_at(
    history: &[HistoryRecord],
    today: NaiveDate,
) -> Result<AllocationChangeSummary, HistoryError> {
    validate_descending(history)?;

    if history.is_empty() {
        return Ok(AllocationChangeSummary::empty());
    }

    let current_signal = &history[0].signal;

    // Shift boundary: first older record whose signal differs. Record i is
    // the last day of the previous run, record i-1 the first day of the
    // current one.
    let shift = history
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, rec)| rec.signal != *current_signal)
        .map(|(i, _)| i);

    let Some(i) = shift else {
        return Ok(AllocationChangeSummary::stable(
            current_signal.clone(),
            history.len(),
        ));
    };

    let previous_signal = &history[i].signal;
    let last_change_date = history[i - 1].date;
    let days_since_change = today.signed_duration_since(last_change_date).num_days();

    // Previous run duration: scan on for the next boundary. If the series
    // ends first the run start is outside the window, so fall back to the
    // remaining record count (an acknowledged approximation at the tail).
    let prev_run_end = history
        .iter()
        .enumerate()
        .skip(i + 1)
        .find(|(_, rec)| rec.signal != *previous_signal)
        .map(|(j, _)| j);

    let previous_signal_duration_days = match prev_run_end {
        Some(j) => {
            let oldest = history[j - 1].date;
            history[i].date.signed_duration_since(oldest).num_days() + 1
        }
        None => (history.len() - i) as i64,
    };

    Ok(AllocationChangeSummary {
        has_history: true,
        no_change_in_history: false,
        current_signal: Some(current_signal.clone()),
        previous_signal: Some(previous_signal.clone()),
        last_change_date: Some(last_change_date),
        days_since_change: Some(days_since_change),
        previous_signal_duration_days: Some(previous_signal_duration_days),
    })
}

/// Reject unsorted or duplicate-dated input before any streak math runs.
/// Exposed so callers can guard series at the ingestion boundary too.
pub fn validate_descending(history: &[HistoryRecord]) -> Result<(), HistoryError> {
    for (index, pair) in history.windows(2).enumerate() {
        let newer = pair[0].date;
        let older = pair[1].date;
        if older == newer {
            return Err(HistoryError::DuplicateDate {
                index: index + 1,
                date: older,
            });
        }
        if older > newer {
            return Err(HistoryError::NotDescending {
                index: index + 1,
                date: older,
            });
        }
    }
    Ok(())
}
