//! Error types for journal IO.

use thiserror::Error;

/// Errors that can occur when reading or writing journal records.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The underlying sink or source refused a read or write.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not parse as a mutation record.
    #[error("malformed journal record at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, JournalError>;
