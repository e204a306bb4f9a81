//! Gemdash: signal history analysis engine for a Global Equity Momentum
//! (GEM) dual-momentum dashboard.
//!
//! The engine consumes already-computed momentum snapshots and daily signal
//! history records per region and derives the active allocation signal,
//! a narrative rationale, streak statistics, and bounded history views.
//! Market data fetching and persistence live in external collaborators.

pub mod config;
pub mod core;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;
