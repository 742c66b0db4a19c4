//! The persisted record format.

use serde::{Deserialize, Serialize};

/// One journaled mutation.
///
/// The key set is an external contract: journals written by one session are
/// replayed by later ones, so field names and shapes must stay put. Empty
/// arrays are always written out, never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRecord {
    /// 1-based position where the synthesised column sits after apply.
    pub column: usize,
    /// Extractor identifier used in derived-column name synthesis.
    pub operation: String,
    /// Locale tag; the empty string means "unspecified".
    pub country: String,
    /// Per-source-row extraction bags, aligned with the pre-apply row order.
    pub objects: Vec<ObjectRecord>,
    /// Positional indices of rows inserted by apply, ascending.
    #[serde(rename = "addedRows")]
    pub added_rows: Vec<usize>,
}

/// The extraction bag of a single source row.
///
/// A `null` element stands for a value that maps to an absent cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub array: Vec<Option<String>>,
}
