//! Line formatting for log records
//!
//! Two layouts are supported:
//! - Plain: `timestamp | LEVEL | logger | message`
//! - Extended: `timestamp | LEVEL | file:line | function | message`
//!
//! Either layout can be colorized with ANSI escapes chosen by severity.

use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

const SEPARATOR: &str = " | ";

/// Field layout of a formatted record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Example: `2025-01-08 10:30:45 | INFO | app.db | connected`
    #[default]
    Plain,

    /// Example: `2025-01-08 10:30:45 | INFO | db.rs:42 | connect | connected`
    ///
    /// The function column is filled by the logging macros. Method calls such
    /// as `logger.info(..)` have no function name and print `?`.
    Extended,
}

/// When to emit ANSI color escapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Never colorize
    Never,

    /// Colorize every destination, log files included
    Always,

    /// Colorize only console sinks attached to a terminal
    #[default]
    Auto,
}

impl ColorMode {
    /// Decide for one destination. Files always pass `false`.
    pub fn should_colorize(self, destination_is_terminal: bool) -> bool {
        match self {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => destination_is_terminal,
        }
    }
}

/// Formatter bound to a single handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFormatter {
    format: RecordFormat,
    timestamp_format: TimestampFormat,
    colorize: bool,
}

impl RecordFormatter {
    pub fn new(format: RecordFormat) -> Self {
        Self {
            format,
            timestamp_format: TimestampFormat::default(),
            colorize: false,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format one record as a single line, without the trailing newline
    pub fn format(&self, record: &LogRecord) -> String {
        let timestamp = self.timestamp_format.format(&record.timestamp);
        let level = record.level;

        let mut fields = Vec::with_capacity(5);
        fields.push(self.severity(&timestamp, level));
        fields.push(self.severity(level.to_str(), level));
        match self.format {
            RecordFormat::Plain => {
                fields.push(self.fixed(&record.logger_name));
            }
            RecordFormat::Extended => {
                let location = match record.line {
                    Some(line) => format!("{}:{}", record.file_name(), line),
                    None => record.file_name().to_string(),
                };
                fields.push(self.fixed(&location));
                fields.push(self.fixed(record.function_name()));
            }
        }
        fields.push(self.severity(&record.message, level));

        fields.join(SEPARATOR)
    }

    fn severity(&self, text: &str, level: LogLevel) -> String {
        if !self.colorize {
            return text.to_string();
        }
        paint_severity(text, level)
    }

    fn fixed(&self, text: &str) -> String {
        if !self.colorize {
            return text.to_string();
        }
        paint_fixed(text)
    }
}

// Escape codes come from colored's color table but are assembled here.
// `Colorize` consults a process-wide override and the terminal state of
// stdout, which would ignore the per-destination ColorMode decision.
#[cfg(feature = "color")]
fn paint(text: &str, color: colored::Color) -> String {
    format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
}

#[cfg(feature = "color")]
fn paint_severity(text: &str, level: LogLevel) -> String {
    paint(text, level.color_code())
}

#[cfg(feature = "color")]
fn paint_fixed(text: &str) -> String {
    paint(text, colored::Color::Cyan)
}

#[cfg(not(feature = "color"))]
fn paint_severity(text: &str, _level: LogLevel) -> String {
    text.to_string()
}

#[cfg(not(feature = "color"))]
fn paint_fixed(text: &str) -> String {
    text.to_string()
}
