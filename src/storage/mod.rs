//! Storage Layer - file-backed persistence
//!
//! The whole store is one document holding a sequence of calibration
//! records. The document is read in full on load and rewritten in full on
//! save; there is no partial update.
//!
//! - `format`: YAML/JSON encoding, chosen by file extension
//! - `file`: load/save against a path
//! - `collection`: pure append and id generation, plus [`CalibrationStore`]

pub mod collection;
pub mod file;
pub mod format;

pub use collection::{append, generate_id, CalibrationStore};
pub use file::{load, save};
pub use format::StoreFormat;
