//! Query Layer - lookups over a loaded record sequence
//!
//! Linear scans only; stores are small and hand-curated.

pub mod engine;

pub use engine::{find_by_id, search};
