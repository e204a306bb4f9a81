//! Dual-momentum signal ranking.
//!
//! The entire strategy decision lives here: pick the stronger of the two
//! risky assets, then require it to strictly beat the threshold rate to
//! earn the allocation, otherwise rotate into the defensive bond. No
//! smoothing, no hysteresis; every call re-decides from the snapshot alone.

use crate::models::{MomentumSnapshot, Region};

/// Rank the region's universe and return the active allocation signal.
///
/// Tie-break: equal risky momentum selects `eq1` (fixed ordinal priority).
/// The threshold comparison is strict `>`; momentum exactly equal to the
/// threshold routes to the bond. Tickers absent from the snapshot rank as
/// zero momentum.
pub fn rank(snapshot: &MomentumSnapshot, region: &Region) -> String {
    let eq1_mom = snapshot.momentum_or_zero(&region.eq1);
    let eq2_mom = snapshot.momentum_or_zero(&region.eq2);
    let threshold = snapshot.threshold();

    let (best, best_mom) = if eq2_mom > eq1_mom {
        (&region.eq2, eq2_mom)
    } else {
        (&region.eq1, eq1_mom)
    };

    if best_mom > threshold {
        best.clone()
    } else {
        region.bond.clone()
    }
}
