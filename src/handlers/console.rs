//! Console handler implementation

use crate::core::{DualSinkWriter, Handler, LogRecord, RecordFormatter, Result};
use std::sync::Arc;

/// Writes formatted records to the console side of a [`DualSinkWriter`]
pub struct ConsoleHandler {
    sink: Arc<DualSinkWriter>,
    formatter: RecordFormatter,
}

impl ConsoleHandler {
    pub fn new(sink: Arc<DualSinkWriter>, formatter: RecordFormatter) -> Self {
        Self { sink, formatter }
    }

    pub fn formatter(&self) -> &RecordFormatter {
        &self.formatter
    }
}

impl Handler for ConsoleHandler {
    fn emit(&mut self, record: &LogRecord) -> Result<()> {
        let mut line = self.formatter.format(record);
        line.push('\n');
        self.sink.write_console(&line)?;
        self.sink.flush_console()
    }

    fn flush(&mut self) -> Result<()> {
        if self.sink.is_closed() {
            return Ok(());
        }
        self.sink.flush_console()
    }

    fn name(&self) -> &str {
        "console"
    }
}
