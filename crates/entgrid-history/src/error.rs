//! Error types for mutation application and replay.

use entgrid_journal::JournalError;
use entgrid_model::ModelError;
use thiserror::Error;

/// Errors raised while applying, reverting, or replaying a mutation.
#[derive(Debug, Error)]
pub enum MutationError {
    /// A journaled row index points outside the current project. Raised by
    /// revert when the project no longer matches what the journal recorded.
    #[error("needed to remove row {row}, but only {row_count} rows were available")]
    RowOutOfRange { row: usize, row_count: usize },

    /// The project's row count changed between mutation construction and
    /// apply.
    #[error("extraction results cover {expected} rows, but the project has {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    /// Collision resolution did not reach a free column name.
    #[error("derived column name {name:?} still collides after {attempts} attempts")]
    NameExhausted { name: String, attempts: usize },

    /// The journal sink or source refused a read or write.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A journal record failed to read or write.
    #[error(transparent)]
    Journal(#[from] JournalError),

    /// A structural edit was rejected by the project model.
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, MutationError>;
