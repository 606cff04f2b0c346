//! Console + file tee writer
//!
//! [`DualSinkWriter`] duplicates every write to the console sink and, when a
//! log file was requested, to that file. It stands in for the process stdout
//! once installed through [`crate::setup_logger`].

use super::error::{LoggerError, Result};
use super::log_path::ensure_dir;
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Console side of the tee
pub type ConsoleSink = Box<dyn Write + Send>;

pub struct DualSinkWriter {
    console: Mutex<Option<ConsoleSink>>,
    file: Mutex<Option<File>>,
    path: Option<PathBuf>,
    console_is_terminal: bool,
}

impl DualSinkWriter {
    /// Tee the process stdout and, if `path` is given, a freshly truncated file
    pub fn create(path: Option<&Path>) -> Result<Self> {
        let console_is_terminal = io::stdout().is_terminal();
        let mut writer = Self::with_console(Box::new(io::stdout()), path)?;
        writer.console_is_terminal = console_is_terminal;
        Ok(writer)
    }

    /// Tee an arbitrary console sink, treated as a non-terminal
    pub fn with_console(console: ConsoleSink, path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    ensure_dir(parent)?;
                }
                let file = File::create(path).map_err(|e| LoggerError::file_open(path, e))?;
                Some(file)
            }
            None => None,
        };

        Ok(Self {
            console: Mutex::new(Some(console)),
            file: Mutex::new(file),
            path: path.map(Path::to_path_buf),
            console_is_terminal: false,
        })
    }

    /// Path of the file sink, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn has_file(&self) -> bool {
        self.file.lock().is_some()
    }

    pub fn console_is_terminal(&self) -> bool {
        self.console_is_terminal
    }

    pub fn is_closed(&self) -> bool {
        self.console.lock().is_none()
    }

    /// Write `text` to the console, then to the file
    pub fn write(&self, text: &str) -> Result<()> {
        self.write_bytes(text.as_bytes())
    }

    fn write_bytes(&self, buf: &[u8]) -> Result<()> {
        self.write_console_bytes(buf)?;
        self.write_file_bytes(buf)
    }

    /// Write to the console sink only
    pub fn write_console(&self, text: &str) -> Result<()> {
        self.write_console_bytes(text.as_bytes())
    }

    fn write_console_bytes(&self, buf: &[u8]) -> Result<()> {
        let mut console = self.console.lock();
        let console = console.as_mut().ok_or(LoggerError::WriterClosed)?;
        console.write_all(buf)?;
        Ok(())
    }

    /// Write to the file sink only; without a file this does nothing
    pub fn write_file(&self, text: &str) -> Result<()> {
        self.write_file_bytes(text.as_bytes())
    }

    fn write_file_bytes(&self, buf: &[u8]) -> Result<()> {
        if self.is_closed() {
            return Err(LoggerError::WriterClosed);
        }
        if let Some(file) = self.file.lock().as_mut() {
            file.write_all(buf)?;
        }
        Ok(())
    }

    pub fn flush_console(&self) -> Result<()> {
        let mut console = self.console.lock();
        let console = console.as_mut().ok_or(LoggerError::WriterClosed)?;
        console.flush()?;
        Ok(())
    }

    /// Flush the file sink and wait until its bytes reach storage
    pub fn flush_file(&self) -> Result<()> {
        if self.is_closed() {
            return Err(LoggerError::WriterClosed);
        }
        if let Some(file) = self.file.lock().as_mut() {
            file.flush()?;
            file.sync_all().map_err(|e| {
                LoggerError::io_operation("syncing log file", "fsync failed", e)
            })?;
        }
        Ok(())
    }

    /// Flush both sinks; the file is synced to storage
    pub fn flush(&self) -> Result<()> {
        self.flush_console()?;
        self.flush_file()
    }

    /// Release both sinks. Calling this again is a no-op.
    pub fn close(&self) {
        if let Some(mut console) = self.console.lock().take() {
            if let Err(e) = console.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush console sink on close: {}", e);
            }
        }
        if let Some(mut file) = self.file.lock().take() {
            if let Err(e) = file.flush().and_then(|()| file.sync_all()) {
                eprintln!("[LOGGER ERROR] Failed to sync log file on close: {}", e);
            }
        }
    }
}

impl std::fmt::Debug for DualSinkWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DualSinkWriter")
            .field("path", &self.path)
            .field("console_is_terminal", &self.console_is_terminal)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Write for &DualSinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf).map_err(into_io_error)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        DualSinkWriter::flush(*self).map_err(into_io_error)
    }
}

fn into_io_error(err: LoggerError) -> io::Error {
    match err {
        LoggerError::IoError(e) => e,
        other => io::Error::other(other),
    }
}

impl Drop for DualSinkWriter {
    fn drop(&mut self) {
        self.close();
    }
}
