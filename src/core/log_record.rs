//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// Call-site information captured by the logging macros
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl Location {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

/// One log call, as seen by the formatters
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub logger_name: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub function: Option<String>,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        logger_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            logger_name: logger_name.into(),
            file: None,
            line: None,
            function: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.file = Some(location.file.to_string());
        self.line = Some(location.line);
        self.function = Some(location.function.to_string());
        self
    }

    /// Location from the `log` facade, which knows file and line but not the function
    pub fn with_source(
        mut self,
        file: Option<&str>,
        line: Option<u32>,
        module_path: Option<&str>,
    ) -> Self {
        self.file = file.map(str::to_string);
        self.line = line;
        self.function = module_path.map(str::to_string);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Base name of the source file, `?` when unknown
    pub fn file_name(&self) -> &str {
        match self.file.as_deref() {
            Some(path) => path.rsplit(['/', '\\']).next().unwrap_or(path),
            None => "?",
        }
    }

    pub fn function_name(&self) -> &str {
        self.function.as_deref().unwrap_or("?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_directories() {
        let record = LogRecord::new(LogLevel::Info, "main", "hello")
            .with_location(Location::new("src/bin/worker.rs", 12, "run"));
        assert_eq!(record.file_name(), "worker.rs");
        assert_eq!(record.function_name(), "run");
        assert_eq!(record.line, Some(12));
    }

    #[test]
    fn test_unknown_location() {
        let record = LogRecord::new(LogLevel::Debug, "main", "hello");
        assert_eq!(record.file_name(), "?");
        assert_eq!(record.function_name(), "?");
    }
}
