//! # Tee Logger
//!
//! Sends print-style output and log records to the console and, optionally,
//! to a timestamped log file, configured with a single call at startup.
//!
//! ## Features
//!
//! - **Tee writer**: [`DualSinkWriter`] duplicates every write to console and file
//! - **One-call setup**: [`setup_logger`] resolves a collision-free file name,
//!   installs the tee as the global stdout target and configures the root logger
//! - **Three call styles**: [`tee_println!`], named [`Logger`] handles with the
//!   crate macros, and the `log` crate's macros all reach the same sinks
//! - **Colors**: per-severity ANSI colors on terminals (`color` feature)
//!
//! ```no_run
//! use tee_logger::{setup_logger, tee_println, LogLevel, LoggerOptions};
//!
//! let logging = setup_logger(
//!     &LoggerOptions::new()
//!         .with_log_file("app.log")
//!         .with_level(LogLevel::Debug),
//! )?;
//! let logger = logging.logger("main");
//!
//! tee_println!("This is a print message.");
//! tee_logger::info!(logger, "This is an info message.");
//! log::debug!("This is a debug message from the log facade.");
//! # Ok::<(), tee_logger::LoggerError>(())
//! ```

pub mod core;
pub mod global;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        ColorMode, CollisionStrategy, DualSinkWriter, Handler, Location, LogLevel, LogRecord,
        Logger, LoggerError, LoggerMetrics, LoggerOptions, Logging, RecordFormat,
        RecordFormatter, Result, RootLogger, TimestampFormat,
    };
    pub use crate::global::{get_logger, setup_logger};
    pub use crate::handlers::{ConsoleHandler, FileHandler};
}

pub use crate::core::{
    ColorMode, CollisionStrategy, ConsoleSink, DualSinkWriter, Handler, Location, LogLevel,
    LogRecord, Logger, LoggerError, LoggerMetrics, LoggerOptions, Logging, RecordFormat,
    RecordFormatter, Result, RootLogger, TimestampFormat, DEFAULT_LOG_DIR,
};
pub use global::{
    configuration_state, flush, get_logger, print_str, root_logger, setup_logger,
    stdout_target, ConfigurationState,
};
pub use handlers::{ConsoleHandler, FileHandler};
