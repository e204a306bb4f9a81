//! Shared data models spanning the engine layers.

pub mod history;
pub mod momentum;
pub mod region;
pub mod summary;

pub use history::HistoryRecord;
pub use momentum::{MomentumSnapshot, THRESHOLD_KEY};
pub use region::Region;
pub use summary::AllocationChangeSummary;
