//! Core application primitives (HTTP surface, in-memory market store)

pub mod http;
pub mod store;

pub use http::*;
pub use store::*;
