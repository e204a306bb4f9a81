//! Narrative rationale for the current signal.
//!
//! The wording branches on which asset holds the allocation. The decision
//! itself was already made by the ranker; the defensive sub-case below only
//! changes the framing, never the signal.

use crate::models::{MomentumSnapshot, Region};

/// Closed enumeration of narrative variants, keeping the decision and the
/// wording decoupled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalCase {
    EquityOneLeads,
    EquityTwoLeads,
    /// Both risky assets sit strictly below the threshold.
    DefensiveBothFailed,
    /// Defensive allocation without both equities failing outright, or
    /// ambiguous data.
    DefensiveGeneral,
}

/// Classify the narrative variant for an already-ranked signal.
pub fn classify(signal: &str, snapshot: &MomentumSnapshot, region: &Region) -> SignalCase {
    if signal == region.eq1 {
        return SignalCase::EquityOneLeads;
    }
    if signal == region.eq2 {
        return SignalCase::EquityTwoLeads;
    }

    let eq1_mom = snapshot.momentum_or_zero(&region.eq1);
    let eq2_mom = snapshot.momentum_or_zero(&region.eq2);
    let threshold = snapshot.threshold();

    if eq1_mom < threshold && eq2_mom < threshold {
        SignalCase::DefensiveBothFailed
    } else {
        SignalCase::DefensiveGeneral
    }
}

/// Render the rationale text for a signal. Pure; never fails for any
/// well-formed snapshot (absent momentum values read as zero).
pub fn compose(signal: &str, snapshot: &MomentumSnapshot, region: &Region) -> String {
    let eq1_mom = percent(snapshot.momentum_or_zero(&region.eq1));
    let eq2_mom = percent(snapshot.momentum_or_zero(&region.eq2));
    let bond_mom = percent(snapshot.momentum_or_zero(&region.bond));
    let threshold_mom = percent(snapshot.threshold());

    match classify(signal, snapshot, region) {
        SignalCase::EquityOneLeads => format!(
            "{} ({}) show {} momentum, ahead of {} at {} and above the {} of {}. \
             The strategy allocates fully to {}.",
            capitalize(&region.eq1_name),
            region.eq1,
            eq1_mom,
            region.eq2_name,
            eq2_mom,
            region.threshold_label,
            threshold_mom,
            region.eq1,
        ),
        SignalCase::EquityTwoLeads => format!(
            "{} ({}) show {} momentum, ahead of {} at {} and above the {} of {}. \
             The strategy allocates fully to {}.",
            capitalize(&region.eq2_name),
            region.eq2,
            eq2_mom,
            region.eq1_name,
            eq1_mom,
            region.threshold_label,
            threshold_mom,
            region.eq2,
        ),
        SignalCase::DefensiveBothFailed => format!(
            "Both {} ({}) and {} ({}) trail the {} of {}. \
             The strategy rotates into {} ({}), currently at {} momentum.",
            region.eq1_name,
            eq1_mom,
            region.eq2_name,
            eq2_mom,
            region.threshold_label,
            threshold_mom,
            region.bond_name,
            region.bond,
            bond_mom,
        ),
        SignalCase::DefensiveGeneral => format!(
            "Equity momentum is not strong enough to clear the {}. \
             The strategy holds {} ({}), currently at {} momentum.",
            region.threshold_label, region.bond_name, region.bond, bond_mom,
        ),
    }
}

fn percent(value: f64) -> String {
    format!("{:+.2}%", value * 100.0)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
