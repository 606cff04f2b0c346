//! Error types for the tee logger

use std::path::Path;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Log directory could not be created
    #[error("Failed to create log directory '{path}': {source}")]
    DirectoryCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be opened for writing
    #[error("Failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Write or flush issued after `close`
    #[error("Writer already closed")]
    WriterClosed,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Another logger already owns the `log` facade
    #[error("Failed to install log facade bridge: {0}")]
    FacadeInstall(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a directory creation error
    pub fn directory_creation(path: &Path, source: std::io::Error) -> Self {
        LoggerError::DirectoryCreation {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a file open error
    pub fn file_open(path: &Path, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

impl From<log::SetLoggerError> for LoggerError {
    fn from(err: log::SetLoggerError) -> Self {
        LoggerError::FacadeInstall(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("LoggerOptions", "empty log directory");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::file_open(
            Path::new("/var/log/app.log"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, LoggerError::FileOpen { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::directory_creation(
            Path::new("/root/output"),
            Error::new(ErrorKind::PermissionDenied, "access denied"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to create log directory '/root/output': access denied"
        );

        assert_eq!(LoggerError::WriterClosed.to_string(), "Writer already closed");

        let err = LoggerError::config("LoggerOptions", "bad level");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerOptions: bad level"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = Error::new(ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("syncing log file", "fsync failed", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("syncing log file"));
        assert!(err.to_string().contains("fsync failed"));
    }
}
