//! In-memory per-region market data, fed by the external pipeline through
//! the ingestion endpoints. Not persistence: contents live and die with the
//! process; durable storage is the collaborator's concern.

use crate::models::{HistoryRecord, MomentumSnapshot};
use crate::signals::{self, HistoryError};
use std::collections::HashMap;

#[derive(Default)]
struct RegionData {
    snapshot: Option<MomentumSnapshot>,
    history: Vec<HistoryRecord>,
}

/// Latest snapshot and history series per region name.
///
/// History is validated on the way in, so readers always see a series the
/// analyzer will accept. A snapshot/history pair may be stale while the
/// collaborator refreshes, but it is always internally consistent.
#[derive(Default)]
pub struct MarketStore {
    regions: HashMap<String, RegionData>,
}

impl MarketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_snapshot(&mut self, region: &str, snapshot: MomentumSnapshot) {
        self.regions.entry(region.to_string()).or_default().snapshot = Some(snapshot);
    }

    /// Replace a region's history with a descending-sorted series.
    /// Unsorted or duplicate-dated input is rejected whole.
    pub fn replace_history(
        &mut self,
        region: &str,
        history: Vec<HistoryRecord>,
    ) -> Result<(), HistoryError> {
        signals::validate_descending(&history)?;
        self.regions.entry(region.to_string()).or_default().history = history;
        Ok(())
    }

    pub fn snapshot(&self, region: &str) -> Option<&MomentumSnapshot> {
        self.regions.get(region).and_then(|d| d.snapshot.as_ref())
    }

    pub fn history(&self, region: &str) -> &[HistoryRecord] {
        self.regions.get(region).map(|d| d.history.as_slice()).unwrap_or(&[])
    }
}
