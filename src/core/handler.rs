//! Handler trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// Formatter-bound adapter that writes records to one sink
pub trait Handler: Send + Sync {
    fn emit(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
