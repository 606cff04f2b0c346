//! Core logger types and traits

pub mod dual_sink;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod log_level;
pub mod log_path;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod setup;
pub mod timestamp;

pub use dual_sink::{ConsoleSink, DualSinkWriter};
pub use error::{LoggerError, Result};
pub use formatter::{ColorMode, RecordFormat, RecordFormatter};
pub use handler::Handler;
pub use log_level::LogLevel;
pub use log_path::{ensure_dir, resolve_log_path, CollisionStrategy};
pub use log_record::{Location, LogRecord};
pub use logger::{Logger, RootLogger};
pub use metrics::LoggerMetrics;
pub use options::{LoggerOptions, DEFAULT_LOG_DIR};
pub use setup::Logging;
pub use timestamp::TimestampFormat;
