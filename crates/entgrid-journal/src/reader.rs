//! Journal reader.

use std::io::{BufRead, BufReader, Read};

use crate::error::{JournalError, Result};
use crate::record::MutationRecord;

/// Read exactly one record from one line of `reader`.
pub fn read_record<R: BufRead>(mut reader: R) -> Result<MutationRecord> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    parse_line(&line, 1)
}

fn parse_line(line: &str, number: usize) -> Result<MutationRecord> {
    serde_json::from_str(line.trim_end_matches(['\n', '\r'])).map_err(|source| {
        JournalError::Malformed {
            line: number,
            source,
        }
    })
}

/// Streaming journal reader, one record per line.
///
/// Iteration ends at end of input or at a blank trailing line.
pub struct JournalReader<R: Read> {
    reader: BufReader<R>,
    line: usize,
}

impl<R: Read> JournalReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line: 0,
        }
    }

    /// Read the next record, or `None` at end of stream.
    pub fn next_record(&mut self) -> Result<Option<MutationRecord>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 || line.trim().is_empty() {
            return Ok(None);
        }
        self.line += 1;
        parse_line(&line, self.line).map(Some)
    }
}
