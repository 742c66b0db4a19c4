//! Per-row extraction results.

use entgrid_journal::ObjectRecord;
use entgrid_model::CellValue;

/// The ordered bag of values extracted from one source row.
///
/// A bag is built up once by the extraction pass and never changes after the
/// mutation is constructed. Elements are optional: a `None` entry stands for
/// a value that maps to an absent cell. An extraction pass that produced
/// nothing for a row hands over an empty bag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    values: Vec<Option<String>>,
}

impl ExtractionResult {
    /// An empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: Vec<Option<String>>) -> Self {
        Self { values }
    }

    /// Append an extracted value.
    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push(Some(value.into()));
    }

    /// Append an entry that maps to an absent cell.
    pub fn push_missing(&mut self) {
        self.values.push(None);
    }

    /// Number of entries in the bag.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// The cell value for entry `index`. Both a `None` entry and an
    /// out-of-range index read as an absent cell.
    pub fn cell_at(&self, index: usize) -> CellValue {
        match self.values.get(index) {
            Some(Some(value)) => CellValue::Text(value.clone()),
            _ => CellValue::Missing,
        }
    }
}

impl From<ObjectRecord> for ExtractionResult {
    fn from(record: ObjectRecord) -> Self {
        Self {
            values: record.array,
        }
    }
}

impl From<&ExtractionResult> for ObjectRecord {
    fn from(result: &ExtractionResult) -> Self {
        ObjectRecord {
            array: result.values.clone(),
        }
    }
}

impl FromIterator<String> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Some).collect(),
        }
    }
}
