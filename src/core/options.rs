//! Configuration for [`Logging`](super::Logging) and [`setup_logger`](crate::setup_logger)

use super::formatter::{ColorMode, RecordFormat};
use super::log_level::LogLevel;
use super::log_path::CollisionStrategy;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LOG_DIR: &str = "./output";

/// Options for one setup call
///
/// Missing keys fall back to the defaults when deserialized.
///
/// # Example
///
/// ```
/// use tee_logger::{LogLevel, LoggerOptions, RecordFormat};
///
/// let options = LoggerOptions::new()
///     .with_log_file("example1.log")
///     .with_log_dir("./output")
///     .with_level(LogLevel::Debug)
///     .with_format(RecordFormat::Extended);
///
/// assert_eq!(options.requested_file(), Some("example1.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    /// File name inside `log_dir`; absent or empty means console only
    pub log_file: Option<String>,
    pub log_dir: PathBuf,
    pub level: LogLevel,
    pub format: RecordFormat,
    pub color: ColorMode,
    pub collision: CollisionStrategy,
    /// Leading timestamp of each record line, on both sinks
    pub timestamp_format: TimestampFormat,
}

impl LoggerOptions {
    /// Console-only defaults: `./output`, `INFO`, plain format, auto colors
    pub fn new() -> Self {
        Self {
            log_file: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            level: LogLevel::default(),
            format: RecordFormat::default(),
            color: ColorMode::default(),
            collision: CollisionStrategy::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_log_file(mut self, file: impl Into<String>) -> Self {
        self.log_file = Some(file.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_only(mut self) -> Self {
        self.log_file = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_collision(mut self, collision: CollisionStrategy) -> Self {
        self.collision = collision;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, timestamp_format: TimestampFormat) -> Self {
        self.timestamp_format = timestamp_format;
        self
    }

    /// The log file name, or `None` when output is console only
    pub fn requested_file(&self) -> Option<&str> {
        self.log_file.as_deref().filter(|name| !name.is_empty())
    }
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self::new()
    }
}
