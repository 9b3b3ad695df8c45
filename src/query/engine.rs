//! Query implementation
//!
//! - Exact id lookup
//! - Case-insensitive substring search across every field of a record

use crate::record::CalibrationRecord;

/// First record whose id equals `id` exactly.
///
/// A miss is a normal outcome and returns `None`.
pub fn find_by_id<'a>(records: &'a [CalibrationRecord], id: &str) -> Option<&'a CalibrationRecord> {
    records.iter().find(|record| record.id == id)
}

/// Records whose text contains `term`, ignoring case, in store order.
///
/// The match is not field-scoped: `term` may hit any value at any depth,
/// including camera fields and the `true`/`false` of boolean flags. See
/// [`CalibrationRecord::search_text`].
pub fn search<'a>(records: &'a [CalibrationRecord], term: &str) -> Vec<&'a CalibrationRecord> {
    let needle = term.to_lowercase();
    let results: Vec<_> = records
        .iter()
        .filter(|record| record.search_text().to_lowercase().contains(&needle))
        .collect();
    tracing::debug!("Search '{}' matched {}/{} records", term, results.len(), records.len());
    results
}
