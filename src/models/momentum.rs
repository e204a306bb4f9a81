use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key under which the risk-free comparison rate is stored in the momentum
/// map. Equities must strictly beat this value to earn the allocation.
pub const THRESHOLD_KEY: &str = "THRESHOLD";

/// One update cycle's worth of per-asset trailing momentum and latest
/// prices, as produced by the external data pipeline. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumSnapshot {
    /// Signal claimed by the producer. Advisory only: the engine always
    /// re-ranks from the momentum values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
    /// Trailing-return fractions keyed by ticker, plus `THRESHOLD`.
    pub momentum: HashMap<String, f64>,
    /// Latest prices keyed by ticker. The threshold has no price.
    #[serde(default)]
    pub prices: HashMap<String, f64>,
    pub last_updated: DateTime<Utc>,
}

impl MomentumSnapshot {
    pub fn new(momentum: HashMap<String, f64>, prices: HashMap<String, f64>) -> Self {
        Self {
            signal: None,
            momentum,
            prices,
            last_updated: Utc::now(),
        }
    }

    /// Momentum for a ticker, with absent tickers ranking as zero. A zero
    /// value naturally loses against any positive momentum, so partial
    /// snapshots degrade toward the defensive asset instead of failing.
    pub fn momentum_or_zero(&self, ticker: &str) -> f64 {
        self.momentum.get(ticker).copied().unwrap_or(0.0)
    }

    /// The risk-free comparison rate, zero when the producer omitted it.
    pub fn threshold(&self) -> f64 {
        self.momentum_or_zero(THRESHOLD_KEY)
    }
}
