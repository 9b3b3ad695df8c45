//! On-disk encodings of the store document

use std::path::Path;

use crate::record::CalibrationRecord;
use crate::{Error, Result};

/// Encoding of a backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    /// Block-style YAML, the default
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl StoreFormat {
    /// Pick the format from the file extension. Anything that is not
    /// `.json` is treated as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StoreFormat::Json,
            _ => StoreFormat::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreFormat::Yaml => "yaml",
            StoreFormat::Json => "json",
        }
    }

    /// Parse a whole document into records, preserving document order.
    ///
    /// An empty document (or an explicit null) is an empty store. `path` is
    /// only used for error reporting.
    pub fn decode(&self, contents: &str, path: &Path) -> Result<Vec<CalibrationRecord>> {
        if self.is_empty_document(contents) {
            return Ok(Vec::new());
        }

        let parsed: Option<Vec<CalibrationRecord>> = match self {
            StoreFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| malformed(path, e))?,
            StoreFormat::Json => serde_json::from_str(contents).map_err(|e| malformed(path, e))?,
        };

        Ok(parsed.unwrap_or_default())
    }

    /// Render records as a full document, fields in declaration order.
    pub fn encode(&self, records: &[CalibrationRecord]) -> Result<String> {
        match self {
            StoreFormat::Yaml => {
                serde_yaml::to_string(records).map_err(|e| Error::Serialize(e.to_string()))
            }
            StoreFormat::Json => {
                let mut out = serde_json::to_string_pretty(records)
                    .map_err(|e| Error::Serialize(e.to_string()))?;
                out.push('\n');
                Ok(out)
            }
        }
    }

    fn is_empty_document(&self, contents: &str) -> bool {
        match self {
            StoreFormat::Yaml => contents.lines().map(str::trim).all(|line| {
                line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
            }),
            StoreFormat::Json => contents.trim().is_empty(),
        }
    }
}

impl std::fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub(crate) fn malformed(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::MalformedStore {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
