//! Process-wide logging registry
//!
//! Holds the single global [`RootLogger`], the installed stdout target used
//! by [`tee_print!`](crate::tee_print) / [`tee_println!`](crate::tee_println),
//! and the bridge that routes the `log` crate's macros into the root.
//!
//! [`setup_logger`] is meant to run once near process start, before worker
//! threads begin logging. Later calls replace the handlers and the stdout
//! target; concurrent calls are last-writer-wins.

use crate::core::{
    DualSinkWriter, LogLevel, LogRecord, Logger, LoggerOptions, Logging, Result, RootLogger,
};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Lifecycle of the global configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationState {
    Unconfigured,
    Configured,
    Reconfigured,
}

struct Registry {
    root: Arc<RootLogger>,
    stdout: RwLock<Option<Arc<DualSinkWriter>>>,
    setups: AtomicUsize,
    bridge_installed: Mutex<bool>,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| Registry {
        root: Arc::new(RootLogger::new()),
        stdout: RwLock::new(None),
        setups: AtomicUsize::new(0),
        bridge_installed: Mutex::new(false),
    })
}

/// Configure process-wide logging
///
/// Resolves the log file path, opens the tee, installs it as the global
/// stdout target, and replaces every handler on the global root with one
/// console handler and (if a file was requested) one file handler. The
/// `log` crate facade is bridged into the root on the first call.
///
/// Directory and file errors abort before the handlers or the stdout
/// target change.
///
/// # Example
///
/// ```no_run
/// use tee_logger::{setup_logger, tee_println, LogLevel, LoggerOptions};
///
/// let options = LoggerOptions::new()
///     .with_log_dir("./output")
///     .with_log_file("app.log")
///     .with_level(LogLevel::Debug);
/// let logging = setup_logger(&options)?;
///
/// tee_println!("This line goes to the console and to {:?}", logging.log_path());
/// log::warn!("so does this record");
/// # Ok::<(), tee_logger::LoggerError>(())
/// ```
pub fn setup_logger(options: &LoggerOptions) -> Result<Logging> {
    let registry = registry();
    install_bridge(registry)?;

    let logging = Logging::configure(options, Arc::clone(&registry.root), None)?;

    // The previous tee closes once its last owner lets go
    let previous = registry
        .stdout
        .write()
        .replace(Arc::clone(logging.writer()));
    drop(previous);

    registry.setups.fetch_add(1, Ordering::AcqRel);
    log::set_max_level(options.level.to_level_filter());

    Ok(logging)
}

pub fn configuration_state() -> ConfigurationState {
    match registry().setups.load(Ordering::Acquire) {
        0 => ConfigurationState::Unconfigured,
        1 => ConfigurationState::Configured,
        _ => ConfigurationState::Reconfigured,
    }
}

/// The global root logger
pub fn root_logger() -> Arc<RootLogger> {
    Arc::clone(&registry().root)
}

/// Named logger feeding the global root
pub fn get_logger(name: impl Into<String>) -> Logger {
    Logger::new(name, root_logger())
}

/// The installed stdout target, if [`setup_logger`] has run
pub fn stdout_target() -> Option<Arc<DualSinkWriter>> {
    registry().stdout.read().clone()
}

/// Write `text` to the installed stdout target, or to plain stdout
pub fn print_str(text: &str) -> Result<()> {
    match stdout_target() {
        Some(writer) => writer.write(text),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            Ok(())
        }
    }
}

#[doc(hidden)]
pub fn print_fmt(args: fmt::Arguments<'_>) {
    let text = match args.as_str() {
        Some(text) => std::borrow::Cow::Borrowed(text),
        None => std::borrow::Cow::Owned(args.to_string()),
    };
    if let Err(e) = print_str(&text) {
        eprintln!("[LOGGER ERROR] Failed to print: {}", e);
    }
}

/// Flush the global root's handlers and the stdout target
pub fn flush() -> Result<()> {
    let registry = registry();
    registry.root.flush()?;
    match stdout_target() {
        Some(writer) if !writer.is_closed() => writer.flush(),
        _ => {
            std::io::stdout().flush()?;
            Ok(())
        }
    }
}

fn install_bridge(registry: &'static Registry) -> Result<()> {
    let mut installed = registry.bridge_installed.lock();
    if *installed {
        return Ok(());
    }
    log::set_boxed_logger(Box::new(FacadeBridge {
        root: Arc::clone(&registry.root),
    }))?;
    *installed = true;
    Ok(())
}

/// Routes `log::info!` and friends into a [`RootLogger`]
struct FacadeBridge {
    root: Arc<RootLogger>,
}

impl log::Log for FacadeBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.root.is_enabled_for(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = LogLevel::from(record.level());
        let entry = LogRecord::new(level, record.target(), record.args().to_string())
            .with_source(record.file(), record.line(), record.module_path());
        self.root.log_record(&entry);
    }

    fn flush(&self) {
        if let Err(e) = self.root.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush log facade: {}", e);
        }
    }
}
