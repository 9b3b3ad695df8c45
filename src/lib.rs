//! # Calibman - Camera Calibration Record Manager
//!
//! Keeps a growing collection of camera-calibration sessions in a single
//! YAML (or JSON) file.
//!
//! Calibman provides:
//! - Typed calibration and camera records with a fixed on-disk field order
//! - A file-backed store with load, save, append and date-based id generation
//! - Exact-id lookup and case-insensitive whole-record search
//! - An interactive prompt layer and themed terminal output for the CLI

pub mod record;
pub mod storage;
pub mod query;
pub mod prompt;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use record::{CalibrationProgram, CalibrationRecord, CameraRecord, Platform};
pub use storage::CalibrationStore;
pub use query::{find_by_id, search};

use std::path::PathBuf;

/// Result type alias for Calibman operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Calibman operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed store file {}: {message}", .path.display())]
    MalformedStore { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Config error: {0}")]
    Config(String),
}
