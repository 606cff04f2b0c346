//! File handler implementation

use crate::core::{DualSinkWriter, Handler, LogRecord, LoggerError, RecordFormatter, Result};
use std::sync::Arc;

/// Writes formatted records to the file side of a [`DualSinkWriter`]
///
/// The handler shares the tee's file handle, so records and printed text
/// interleave in the order they were issued.
pub struct FileHandler {
    sink: Arc<DualSinkWriter>,
    formatter: RecordFormatter,
}

impl FileHandler {
    pub fn new(sink: Arc<DualSinkWriter>, formatter: RecordFormatter) -> Result<Self> {
        if !sink.has_file() {
            return Err(LoggerError::config(
                "FileHandler",
                "writer has no file sink",
            ));
        }
        Ok(Self { sink, formatter })
    }

    pub fn formatter(&self) -> &RecordFormatter {
        &self.formatter
    }
}

impl Handler for FileHandler {
    fn emit(&mut self, record: &LogRecord) -> Result<()> {
        let mut line = self.formatter.format(record);
        line.push('\n');
        self.sink.write_file(&line)
    }

    fn flush(&mut self) -> Result<()> {
        if self.sink.is_closed() {
            return Ok(());
        }
        self.sink.flush_file()
    }

    fn name(&self) -> &str {
        "file"
    }
}
