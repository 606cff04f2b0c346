//! Logging and printing macros.
//!
//! The logging macros take a [`Logger`](crate::Logger) handle, format their
//! arguments like `format!`, and record the call site's file, line and
//! enclosing function.
//!
//! # Examples
//!
//! ```
//! use tee_logger::{info, warning, Logger, RootLogger};
//! use std::sync::Arc;
//!
//! let root = Arc::new(RootLogger::new());
//! let logger = Logger::new("server", root);
//!
//! info!(logger, "Server started");
//! let port = 8080;
//! warning!(logger, "Port {} already bound, retrying", port);
//! ```

/// Name of the enclosing function, without its module path.
///
/// Inside closures the closure frames are skipped, so the name of the
/// function containing the closure is returned.
///
/// ```
/// fn connect() -> &'static str {
///     tee_logger::function_name!()
/// }
/// assert_eq!(connect(), "connect");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// Call-site [`Location`](crate::Location) of the macro invocation.
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(file!(), line!(), $crate::function_name!())
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use tee_logger::{LogLevel, Logger, RootLogger};
/// # let logger = Logger::new("doc", std::sync::Arc::new(RootLogger::new()));
/// use tee_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, format!($($arg)+), $crate::location!())
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Print through the installed stdout target (console and log file).
///
/// Falls back to the plain process stdout before [`setup_logger`](crate::setup_logger)
/// has run.
///
/// ```
/// tee_logger::tee_print!("progress: {}%", 40);
/// ```
#[macro_export]
macro_rules! tee_print {
    ($($arg:tt)*) => {
        $crate::global::print_fmt(format_args!($($arg)*))
    };
}

/// Like [`tee_print!`], with a trailing newline.
///
/// ```
/// tee_logger::tee_println!("This is a print message from {}.", "main");
/// ```
#[macro_export]
macro_rules! tee_println {
    () => {
        $crate::global::print_fmt(format_args!("\n"))
    };
    ($($arg:tt)*) => {
        $crate::global::print_fmt(format_args!("{}\n", format_args!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Handler, LogLevel, LogRecord, Logger, Result, RootLogger};
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Capture(Arc<Mutex<Vec<LogRecord>>>);

    impl Handler for Capture {
        fn emit(&mut self, record: &LogRecord) -> Result<()> {
            self.0.lock().push(record.clone());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    fn capturing_logger() -> (Logger, Arc<Mutex<Vec<LogRecord>>>) {
        let root = Arc::new(RootLogger::new());
        root.set_level(LogLevel::Debug);
        let records = Arc::new(Mutex::new(Vec::new()));
        root.add_handler(Box::new(Capture(Arc::clone(&records))));
        (Logger::new("macros", root), records)
    }

    #[test]
    fn test_function_name() {
        fn outer() -> &'static str {
            function_name!()
        }
        assert_eq!(outer(), "outer");

        let from_closure = (|| function_name!())();
        assert_eq!(from_closure, "test_function_name");
    }

    #[test]
    fn test_level_macros() {
        let (logger, records) = capturing_logger();
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        critical!(logger, "Critical failure: {}", "system");

        let levels: Vec<LogLevel> = records.lock().iter().map(|r| r.level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
        assert_eq!(records.lock()[1].message, "Items: 100");
    }

    #[test]
    fn test_macro_captures_location() {
        let (logger, records) = capturing_logger();
        info!(logger, "located");

        let record = records.lock()[0].clone();
        assert_eq!(record.file_name(), "macros.rs");
        assert_eq!(record.function_name(), "test_macro_captures_location");
        assert!(record.line.is_some());
    }
}
