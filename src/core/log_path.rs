//! Log directory creation and collision-free file naming

use super::error::{LoggerError, Result};
use super::timestamp::file_suffix;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What to do when the requested log file already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionStrategy {
    /// Insert one timestamp suffix; if that name is taken too, it is truncated
    Timestamp,

    /// Insert a timestamp suffix, then `-1`, `-2`, ... until the name is free
    #[default]
    TimestampCounter,
}

/// Create `dir` and its parents if missing
///
/// A concurrent creator winning the race is not an error.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    match std::fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(LoggerError::directory_creation(dir, e)),
    }
}

/// Split a file name into base and extension, the extension keeping its dot
///
/// Leading dots belong to the base: `.profile` has no extension.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].rfind('.') {
        Some(idx) => file_name.split_at(leading + idx),
        None => (file_name, ""),
    }
}

/// `dir/app.log` + `-2025-01-08-10-30-45` -> `dir/app-2025-01-08-10-30-45.log`
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (base, ext) = split_extension(&file_name);
    path.with_file_name(format!("{}{}{}", base, suffix, ext))
}

/// Compute where the log file goes, creating `dir` on the way
pub fn resolve_log_path(
    dir: &Path,
    file: &str,
    now: DateTime<Local>,
    strategy: CollisionStrategy,
) -> Result<PathBuf> {
    if Path::new(file).file_name().is_none() {
        return Err(LoggerError::config(
            "log_file",
            format!("'{}' does not name a file", file),
        ));
    }

    ensure_dir(dir)?;
    let candidate = dir.join(file);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let stamp = file_suffix(&now);
    let stamped = with_suffix(&candidate, &stamp);
    match strategy {
        CollisionStrategy::Timestamp => Ok(stamped),
        CollisionStrategy::TimestampCounter => {
            let mut resolved = stamped;
            let mut counter = 1u32;
            while resolved.exists() {
                resolved = with_suffix(&candidate, &format!("{}-{}", stamp, counter));
                counter += 1;
            }
            Ok(resolved)
        }
    }
}
