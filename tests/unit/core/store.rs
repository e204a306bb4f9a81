//! Unit tests for the in-memory market store

use chrono::NaiveDate;
use gemdash::core::store::MarketStore;
use gemdash::models::{HistoryRecord, MomentumSnapshot};
use gemdash::signals::HistoryError;
use std::collections::HashMap;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn rec(id: i64, date: NaiveDate, signal: &str) -> HistoryRecord {
    HistoryRecord {
        id,
        date,
        momentum: HashMap::new(),
        threshold_mom: None,
        signal: signal.to_string(),
    }
}

#[test]
fn unknown_region_reads_as_empty() {
    let store = MarketStore::new();
    assert!(store.snapshot("US").is_none());
    assert!(store.history("US").is_empty());
}

#[test]
fn snapshot_roundtrips_per_region() {
    let mut store = MarketStore::new();
    let snap = MomentumSnapshot::new(
        HashMap::from([("SPY".to_string(), 0.08)]),
        HashMap::from([("SPY".to_string(), 512.3)]),
    );
    store.set_snapshot("US", snap);

    assert_eq!(store.snapshot("US").unwrap().momentum_or_zero("SPY"), 0.08);
    assert!(store.snapshot("EU").is_none());
}

#[test]
fn malformed_history_is_rejected_and_old_series_kept() {
    let mut store = MarketStore::new();
    let good = vec![rec(2, d(2024, 5, 2), "SPY"), rec(1, d(2024, 5, 1), "SPY")];
    store.replace_history("US", good).unwrap();

    let dup = vec![rec(4, d(2024, 5, 3), "SPY"), rec(3, d(2024, 5, 3), "SPY")];
    let err = store.replace_history("US", dup).unwrap_err();
    assert!(matches!(err, HistoryError::DuplicateDate { .. }));

    // The previously ingested series survives the failed replacement
    assert_eq!(store.history("US").len(), 2);
    assert_eq!(store.history("US")[0].id, 2);
}

#[test]
fn history_replacement_swaps_the_whole_series() {
    let mut store = MarketStore::new();
    store
        .replace_history("US", vec![rec(1, d(2024, 5, 1), "SPY")])
        .unwrap();
    store
        .replace_history(
            "US",
            vec![rec(3, d(2024, 5, 3), "BND"), rec(2, d(2024, 5, 2), "BND")],
        )
        .unwrap();

    assert_eq!(store.history("US").len(), 2);
    assert_eq!(store.history("US")[0].signal, "BND");
}
