//! Timestamp formatting utilities
//!
//! Record timestamps and collision suffixes for log file names are both
//! rendered in local time.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// strftime pattern inserted before the extension of a colliding log file
pub const FILE_SUFFIX_FORMAT: &str = "-%Y-%m-%d-%H-%M-%S";

/// Timestamp format options for log lines
///
/// Selected through [`LoggerOptions::timestamp_format`](crate::LoggerOptions).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`
    #[default]
    Standard,

    /// `2025-01-08 10:30:45.123`
    Millis,

    /// RFC 3339 with the local offset: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use tee_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Standard => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::Millis => datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// Render the `-YYYY-MM-DD-HH-MM-SS` suffix used for colliding log files
#[must_use]
pub fn file_suffix(datetime: &DateTime<Local>) -> String {
    datetime.format(FILE_SUFFIX_FORMAT).to_string()
}
