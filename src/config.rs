//! Environment and region configuration.
//!
//! Regions are static configuration, not computed state: each names exactly
//! three tradable tickers plus a threshold label. The reference setup ships
//! the "US" and "EU" universes, but nothing downstream assumes the pair.

use crate::models::Region;
use std::env;

/// Current runtime environment, from the `ENVIRONMENT` variable.
/// Defaults to "sandbox" for local development.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// HTTP port, from `PORT`, defaulting to 8080.
pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}

/// The reference region table.
pub fn default_regions() -> Vec<Region> {
    vec![
        Region {
            name: "US".to_string(),
            eq1: "SPY".to_string(),
            eq2: "VEU".to_string(),
            bond: "BND".to_string(),
            eq1_name: "US equities".to_string(),
            eq2_name: "global ex-US equities".to_string(),
            bond_name: "US aggregate bonds".to_string(),
            threshold_label: "T-Bill rate".to_string(),
        },
        Region {
            name: "EU".to_string(),
            eq1: "CSPX.AS".to_string(),
            eq2: "EXUS.L".to_string(),
            bond: "AGGH.AS".to_string(),
            eq1_name: "S&P 500 equities".to_string(),
            eq2_name: "world ex-US equities".to_string(),
            bond_name: "global aggregate bonds".to_string(),
            threshold_label: "EUR cash rate".to_string(),
        },
    ]
}

/// Look up a region by its case-sensitive name.
pub fn find_region<'a>(regions: &'a [Region], name: &str) -> Option<&'a Region> {
    regions.iter().find(|r| r.name == name)
}
