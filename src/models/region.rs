use serde::{Deserialize, Serialize};

/// A region's three-way rotation universe: two risky assets, one defensive
/// bond asset, and the label of the risk-free threshold reference.
///
/// Passed into every engine call as immutable configuration so multiple
/// regions can be analyzed concurrently without interference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub eq1: String,
    pub eq2: String,
    pub bond: String,
    pub eq1_name: String,
    pub eq2_name: String,
    pub bond_name: String,
    /// Display label for the threshold rate (e.g. "T-Bill rate").
    pub threshold_label: String,
}

impl Region {
    /// All tradable tickers of this universe, in priority order.
    pub fn tickers(&self) -> [&str; 3] {
        [&self.eq1, &self.eq2, &self.bond]
    }

    pub fn tracks(&self, ticker: &str) -> bool {
        self.tickers().contains(&ticker)
    }
}
