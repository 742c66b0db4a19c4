//! Journal writer.

use std::io::Write;

use crate::error::Result;
use crate::record::MutationRecord;

/// Write one record as a single compact JSON object, without framing.
///
/// The caller owns the one-record-per-line discipline; [`JournalWriter`]
/// provides it for whole streams.
pub fn write_record<W: Write>(mut writer: W, record: &MutationRecord) -> Result<()> {
    serde_json::to_writer(&mut writer, record).map_err(std::io::Error::from)?;
    Ok(())
}

/// Streaming journal writer, one record per line.
pub struct JournalWriter<W: Write> {
    writer: W,
}

impl<W: Write> JournalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Append `record` followed by a newline.
    pub fn append(&mut self, record: &MutationRecord) -> Result<()> {
        write_record(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
