//! Record collection operations and the file-backed store handle

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::file;
use crate::query;
use crate::record::CalibrationRecord;
use crate::Result;

/// Id for the next record created on `today`.
///
/// `YYYYMMDD-NN` where `NN` is `existing.len() + 1`, zero-padded to two
/// digits. This counts records; it does not look for collisions with ids
/// already in the store, so a store with removed entries can repeat an id.
pub fn generate_id(existing: &[CalibrationRecord], today: NaiveDate) -> String {
    format!("{}-{:02}", today.format("%Y%m%d"), existing.len() + 1)
}

/// New sequence with `record` after all of `records`.
pub fn append(records: &[CalibrationRecord], record: CalibrationRecord) -> Vec<CalibrationRecord> {
    let mut out = Vec::with_capacity(records.len() + 1);
    out.extend_from_slice(records);
    out.push(record);
    out
}

/// All records of one backing file, held in memory.
///
/// Mutations only touch memory until [`CalibrationStore::persist`] writes
/// the whole collection back to the same path.
#[derive(Debug, Clone)]
pub struct CalibrationStore {
    path: PathBuf,
    records: Vec<CalibrationRecord>,
}

impl CalibrationStore {
    /// Load the store at `path` (missing file = empty store)
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = file::load(&path)?;
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[CalibrationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next record added on `today` should get
    pub fn next_id(&self, today: NaiveDate) -> String {
        generate_id(&self.records, today)
    }

    /// Append a record in memory
    pub fn add(&mut self, record: CalibrationRecord) {
        tracing::info!("Adding calibration {} to {}", record.id, self.path.display());
        self.records.push(record);
    }

    /// Write all records back to the store path
    pub fn persist(&self) -> Result<()> {
        file::save(&self.path, &self.records)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&CalibrationRecord> {
        query::find_by_id(&self.records, id)
    }

    pub fn search(&self, term: &str) -> Vec<&CalibrationRecord> {
        query::search(&self.records, term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn records(n: usize) -> Vec<CalibrationRecord> {
        (1..=n)
            .map(|i| CalibrationRecord::new(format!("20240101-{:02}", i), "2024-01-01"))
            .collect()
    }

    #[test]
    fn test_generate_id_counts_records() {
        assert_eq!(generate_id(&[], day()), "20240115-01");
        assert_eq!(generate_id(&records(11), day()), "20240115-12");
        assert_eq!(generate_id(&records(99), day()), "20240115-100");
    }

    #[test]
    fn test_generate_id_ignores_existing_ids() {
        // Counting scheme: an existing "-02" is not skipped
        let existing = vec![CalibrationRecord::new("20240115-02", "2024-01-15")];
        assert_eq!(generate_id(&existing, day()), "20240115-02");
    }

    #[test]
    fn test_append_ordering() {
        let original = records(2);
        let new = CalibrationRecord::new("20240115-03", "2024-01-15");

        let appended = append(&original, new.clone());

        assert_eq!(original.len(), 2);
        assert_eq!(appended.len(), 3);
        assert_eq!(&appended[..2], &original[..]);
        assert_eq!(appended[2], new);
    }

    #[test]
    fn test_store_add_and_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibrations.yaml");

        let mut store = CalibrationStore::open(&path).unwrap();
        assert!(store.is_empty());

        let id = store.next_id(day());
        assert_eq!(id, "20240115-01");
        store.add(CalibrationRecord::new(id, "2024-01-15").with_scene("lab"));
        store.persist().unwrap();

        let reopened = CalibrationStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.next_id(day()), "20240115-02");
        assert!(reopened.find_by_id("20240115-01").is_some());
        assert_eq!(reopened.search("LAB").len(), 1);
    }
}
