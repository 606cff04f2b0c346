//! Owned logging configuration
//!
//! [`Logging`] wires a [`DualSinkWriter`] to a [`RootLogger`]: it resolves
//! the log file path, opens the tee, and replaces the root's handlers with
//! one console handler and, when a file was requested, one file handler.

use super::{
    dual_sink::{ConsoleSink, DualSinkWriter},
    error::Result,
    formatter::RecordFormatter,
    handler::Handler,
    log_path::resolve_log_path,
    logger::{Logger, RootLogger},
    options::LoggerOptions,
};
use crate::handlers::{ConsoleHandler, FileHandler};
use chrono::Local;
use std::path::Path;
use std::sync::Arc;

/// Result of a setup call: the tee, the root it feeds, and the options used
///
/// Dropping a `Logging` flushes it. The tee itself is closed when its last
/// owner (this value, the root's handlers, or the global stdout slot) goes
/// away, or explicitly through [`Logging::close`].
pub struct Logging {
    writer: Arc<DualSinkWriter>,
    root: Arc<RootLogger>,
    options: LoggerOptions,
}

impl Logging {
    /// Configure a private root logger teeing the process stdout
    ///
    /// Nothing process-wide is touched; use [`crate::setup_logger`] for that.
    pub fn new(options: &LoggerOptions) -> Result<Self> {
        Self::configure(options, Arc::new(RootLogger::new()), None)
    }

    /// Like [`Logging::new`], writing console output to `console`
    pub fn with_console(options: &LoggerOptions, console: ConsoleSink) -> Result<Self> {
        Self::configure(options, Arc::new(RootLogger::new()), Some(console))
    }

    /// Open the tee and reconfigure `root` with it
    ///
    /// Path or file errors return before `root` is modified.
    pub(crate) fn configure(
        options: &LoggerOptions,
        root: Arc<RootLogger>,
        console: Option<ConsoleSink>,
    ) -> Result<Self> {
        let path = match options.requested_file() {
            Some(file) => Some(resolve_log_path(
                &options.log_dir,
                file,
                Local::now(),
                options.collision,
            )?),
            None => None,
        };

        let writer = match console {
            Some(console) => DualSinkWriter::with_console(console, path.as_deref())?,
            None => DualSinkWriter::create(path.as_deref())?,
        };
        let writer = Arc::new(writer);

        let handlers = build_handlers(&writer, options)?;
        root.set_level(options.level);
        root.replace_handlers(handlers);

        Ok(Self {
            writer,
            root,
            options: options.clone(),
        })
    }

    pub fn writer(&self) -> &Arc<DualSinkWriter> {
        &self.writer
    }

    pub fn root(&self) -> &Arc<RootLogger> {
        &self.root
    }

    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    /// Resolved log file path, `None` in console-only mode
    pub fn log_path(&self) -> Option<&Path> {
        self.writer.path()
    }

    /// Named logger feeding this configuration's root
    pub fn logger(&self, name: impl Into<String>) -> Logger {
        Logger::new(name, Arc::clone(&self.root))
    }

    /// Write raw text to both sinks
    pub fn print(&self, text: &str) -> Result<()> {
        self.writer.write(text)
    }

    /// Flush the handlers, then the tee (syncing the file to storage)
    pub fn flush(&self) -> Result<()> {
        self.root.flush()?;
        self.writer.flush()
    }

    /// Flush and release both sinks. Safe to call more than once.
    pub fn close(&self) {
        if !self.writer.is_closed() {
            if let Err(e) = self.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush before close: {}", e);
            }
        }
        self.writer.close();
    }
}

impl Drop for Logging {
    fn drop(&mut self) {
        if self.writer.is_closed() {
            return;
        }
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

impl std::fmt::Debug for Logging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logging")
            .field("writer", &self.writer)
            .field("level", &self.root.level())
            .field("options", &self.options)
            .finish()
    }
}

/// One console handler, plus one file handler when the tee has a file
fn build_handlers(
    writer: &Arc<DualSinkWriter>,
    options: &LoggerOptions,
) -> Result<Vec<Box<dyn Handler>>> {
    let console_formatter = RecordFormatter::new(options.format)
        .with_timestamp_format(options.timestamp_format.clone())
        .with_colors(options.color.should_colorize(writer.console_is_terminal()));
    let mut handlers: Vec<Box<dyn Handler>> = vec![Box::new(ConsoleHandler::new(
        Arc::clone(writer),
        console_formatter,
    ))];

    if writer.has_file() {
        let file_formatter = RecordFormatter::new(options.format)
            .with_timestamp_format(options.timestamp_format.clone())
            .with_colors(options.color.should_colorize(false));
        handlers.push(Box::new(FileHandler::new(Arc::clone(writer), file_formatter)?));
    }

    Ok(handlers)
}
