//! Load and save a store file

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::format::{malformed, StoreFormat};
use crate::record::CalibrationRecord;
use crate::Result;

/// Load every record from `path`.
///
/// A missing file is an empty store, not an error. Anything present that
/// does not parse as a sequence of records fails with
/// [`crate::Error::MalformedStore`].
pub fn load(path: &Path) -> Result<Vec<CalibrationRecord>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No store at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let contents = String::from_utf8(bytes).map_err(|e| malformed(path, e))?;

    let format = StoreFormat::from_path(path);
    let records = format.decode(&contents, path)?;
    tracing::debug!("Loaded {} records from {} ({})", records.len(), path.display(), format);
    Ok(records)
}

/// Overwrite `path` with `records`.
///
/// The document is written to a temp file in the same directory and renamed
/// into place, so a failed save leaves the previous file intact.
pub fn save(path: &Path, records: &[CalibrationRecord]) -> Result<()> {
    let format = StoreFormat::from_path(path);
    let contents = format.encode(records)?;

    let dir = parent_dir(path);
    std::fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!("Saved {} records to {} ({})", records.len(), path.display(), format);
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
