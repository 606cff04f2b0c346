//! Root logger and named logger handles

use super::{
    error::Result,
    handler::Handler,
    log_level::LogLevel,
    log_record::{Location, LogRecord},
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Severity threshold plus the handlers every record is dispatched to
///
/// One instance backs the process-wide registry; independent instances can
/// be created for scoped configurations.
pub struct RootLogger {
    min_level: RwLock<LogLevel>,
    handlers: RwLock<Vec<Box<dyn Handler>>>,
    metrics: LoggerMetrics,
}

impl RootLogger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: RwLock::new(LogLevel::Info),
            handlers: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    #[inline]
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    pub fn add_handler(&self, handler: Box<dyn Handler>) {
        self.handlers.write().push(handler);
    }

    /// Detach every current handler and attach `handlers` instead
    ///
    /// Detached handlers are flushed before they are dropped.
    pub fn replace_handlers(&self, handlers: Vec<Box<dyn Handler>>) {
        let previous = std::mem::replace(&mut *self.handlers.write(), handlers);
        for (idx, mut handler) in previous.into_iter().enumerate() {
            if let Err(e) = handler.flush() {
                eprintln!(
                    "[LOGGER ERROR] Detached handler #{} ({}) flush failed: {}",
                    idx,
                    handler.name(),
                    e
                );
            }
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn handler_names(&self) -> Vec<String> {
        self.handlers
            .read()
            .iter()
            .map(|handler| handler.name().to_string())
            .collect()
    }

    /// Build and dispatch a record unless `level` is below the threshold
    pub fn log(
        &self,
        level: LogLevel,
        logger_name: &str,
        message: impl Into<String>,
        location: Option<Location>,
    ) {
        if !self.is_enabled_for(level) {
            self.metrics.record_filtered();
            return;
        }

        let mut record = LogRecord::new(level, logger_name, message);
        if let Some(location) = location {
            record = record.with_location(location);
        }
        self.dispatch(&record);
    }

    /// Dispatch an already built record, applying the threshold
    pub fn log_record(&self, record: &LogRecord) {
        if !self.is_enabled_for(record.level) {
            self.metrics.record_filtered();
            return;
        }
        self.dispatch(record);
    }

    /// Hand the record to every handler with per-handler panic isolation
    ///
    /// A failing handler is reported on stderr; the remaining handlers still
    /// receive the record.
    fn dispatch(&self, record: &LogRecord) {
        let mut handlers = self.handlers.write();

        for (idx, handler) in handlers.iter_mut().enumerate() {
            let emit_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler.emit(record)
            }));

            match emit_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Handler #{} ({}) failed: {}", idx, handler.name(), e);
                    self.metrics.record_handler_failure();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Handler #{} panicked: {}. \
                         Other handlers continue to function.",
                        idx, panic_msg
                    );
                    self.metrics.record_handler_failure();
                }
            }
        }

        self.metrics.record_emitted();
    }

    pub fn flush(&self) -> Result<()> {
        let mut handlers = self.handlers.write();
        for handler in handlers.iter_mut() {
            handler.flush()?;
        }
        Ok(())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for RootLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RootLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Named handle routing into a [`RootLogger`]
///
/// The methods record the caller's file and line but not the enclosing
/// function, so extended lines show `?` in the function column. The logging
/// macros ([`info!`](crate::info) and friends) capture the function name too.
///
/// # Example
///
/// ```
/// use tee_logger::{LogLevel, Logger, RootLogger};
/// use std::sync::Arc;
///
/// let root = Arc::new(RootLogger::new());
/// root.set_level(LogLevel::Debug);
///
/// let logger = Logger::new("app.db", root);
/// logger.debug("opening pool");
/// tee_logger::info!(logger, "connected to {}", "primary");
/// ```
#[derive(Clone)]
pub struct Logger {
    name: String,
    root: Arc<RootLogger>,
}

impl Logger {
    pub fn new(name: impl Into<String>, root: Arc<RootLogger>) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Arc<RootLogger> {
        &self.root
    }

    #[inline]
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        self.root.is_enabled_for(level)
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.root.is_enabled_for(level) {
            self.root.metrics().record_filtered();
            return;
        }
        let caller = std::panic::Location::caller();
        let record = LogRecord::new(level, self.name.as_str(), message).with_source(
            Some(caller.file()),
            Some(caller.line()),
            None,
        );
        self.root.log_record(&record);
    }

    pub fn log_at(&self, level: LogLevel, message: impl Into<String>, location: Location) {
        self.root.log(level, &self.name, message, Some(location));
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.root.level())
            .finish()
    }
}
