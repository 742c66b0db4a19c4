//! Line-oriented journal codec for reversible table mutations.
//!
//! Each mutation is persisted as one compact JSON object per line. The codec
//! owns quoting, numeric integrity, and the exact key set of the record; it
//! does not own framing beyond a single logical record — [`JournalWriter`]
//! adds the newline between records, and [`read_record`] consumes exactly
//! one line.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use entgrid_journal::{JournalReader, JournalWriter, MutationRecord, ObjectRecord};
//!
//! let record = MutationRecord {
//!     column: 1,
//!     operation: "ne".to_string(),
//!     country: String::new(),
//!     objects: vec![ObjectRecord { array: vec![Some("X".to_string())] }],
//!     added_rows: vec![],
//! };
//!
//! let mut buffer = Vec::new();
//! let mut writer = JournalWriter::new(&mut buffer);
//! writer.append(&record).unwrap();
//! writer.flush().unwrap();
//!
//! let mut reader = JournalReader::new(Cursor::new(&buffer));
//! assert_eq!(reader.next_record().unwrap(), Some(record));
//! assert_eq!(reader.next_record().unwrap(), None);
//! ```

mod error;
mod reader;
mod record;
mod writer;

pub use error::{JournalError, Result};
pub use reader::{JournalReader, read_record};
pub use record::{MutationRecord, ObjectRecord};
pub use writer::{JournalWriter, write_record};
