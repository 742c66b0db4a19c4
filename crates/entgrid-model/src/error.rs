//! Error types for model operations.

use thiserror::Error;

/// Errors raised by structural operations on a project.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A column with this name already exists in the project.
    #[error("duplicate column name: {name}")]
    DuplicateColumn { name: String },

    /// A 1-based column position fell outside the column list.
    #[error("column position {position} is out of range: project has {count} columns")]
    ColumnPositionOutOfRange { position: usize, count: usize },

    /// A 0-based row index fell outside the row list.
    #[error("row index {index} is out of range: project has {count} rows")]
    RowIndexOutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
