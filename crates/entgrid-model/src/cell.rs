//! Cell values.

use std::fmt;

/// A single cell of a row.
///
/// Absent cells are represented explicitly as [`CellValue::Missing`] so that
/// sparse rows can be addressed uniformly: reading any slot of any row yields
/// a value, and rows never need to be padded up front.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Returns true for the absent cell.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// The textual content, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            CellValue::Missing => None,
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(value) => f.write_str(value),
            CellValue::Missing => Ok(()),
        }
    }
}
