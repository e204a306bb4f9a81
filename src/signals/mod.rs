//! The signal history analysis engine.
//!
//! Four pure, synchronous, stateless components: the ranker derives the
//! active allocation signal from a momentum snapshot, the run-length
//! analyzer turns an ordered history series into streak statistics, the
//! windower bounds the series per reporting range, and the interpretation
//! composer renders the rationale narrative. Safe to call concurrently for
//! different regions or snapshots; each call only reads its arguments.

pub mod error;
pub mod interpretation;
pub mod ranker;
pub mod streaks;
pub mod window;

pub use error::HistoryError;
pub use interpretation::{classify, compose, SignalCase};
pub use ranker::rank;
pub use streaks::{analyze, analyze_at, validate_descending};
pub use window::{chart_window, window, HistoryRange, CHART_SPAN};
