//! Integration tests for process-wide setup
//!
//! These tests verify:
//! - Records and printed text reach both console and file
//! - Existing log files are never overwritten
//! - Console-only mode creates no file
//! - Severity threshold applies to every call style and to both sinks
//! - Repeated setup leaves exactly one handler per sink
//! - Flush makes every write visible on disk
//!
//! The global registry is shared by every test in this binary, so each test
//! holds `GLOBAL_LOCK` while it runs.

use chrono::NaiveDateTime;
use parking_lot::Mutex;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use tee_logger::prelude::*;
use tee_logger::{configuration_state, stdout_target, tee_println, ConfigurationState};
use tempfile::TempDir;

static GLOBAL_LOCK: Mutex<()> = parking_lot::const_mutex(());

fn file_options(dir: &Path, file: &str, level: LogLevel) -> LoggerOptions {
    LoggerOptions::new()
        .with_log_dir(dir)
        .with_log_file(file)
        .with_level(level)
        .with_color(ColorMode::Never)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read log file")
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("console output is UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_debug_and_warning_scenario() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_dir = temp_dir.path().join("output");

    let logging =
        setup_logger(&file_options(&log_dir, "app.log", LogLevel::Debug)).expect("setup");
    assert_eq!(logging.log_path(), Some(log_dir.join("app.log").as_path()));
    assert_ne!(configuration_state(), ConfigurationState::Unconfigured);

    let logger = get_logger("main");
    logger.debug("x");
    logger.warning("y");
    logging.flush().expect("Failed to flush");

    let content = read(&log_dir.join("app.log"));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "content was: {content}");
    assert!(lines[0].ends_with('x'));
    assert!(lines[1].ends_with('y'));

    for (line, level) in lines.iter().zip(["DEBUG", "WARNING"]) {
        let fields: Vec<&str> = line.split(" | ").collect();
        assert_eq!(fields.len(), 4);
        NaiveDateTime::parse_from_str(fields[0], "%Y-%m-%d %H:%M:%S")
            .expect("timestamp should parse");
        assert_eq!(fields[1], level);
        assert_eq!(fields[2], "main");
    }
}

#[test]
fn test_print_and_log_share_file() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let logging =
        setup_logger(&file_options(temp_dir.path(), "mixed.log", LogLevel::Debug)).expect("setup");

    tee_println!("This is a print message from {}.", "main");
    log::info!("This is an info message from the log facade");
    tee_logger::info!(logging.logger("helpers"), "from macro {}", 1);
    tee_logger::flush().expect("Failed to flush");

    let content = read(logging.log_path().expect("file mode"));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3, "content was: {content}");
    assert_eq!(lines[0], "This is a print message from main.");
    assert!(lines[1].contains(" | INFO | integration_tests | "));
    assert!(lines[1].ends_with("This is an info message from the log facade"));
    assert!(lines[2].contains(" | INFO | helpers | from macro 1"));
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let original = temp_dir.path().join("app.log");
    fs::write(&original, "previous run\n").expect("seed");

    let logging =
        setup_logger(&file_options(temp_dir.path(), "app.log", LogLevel::Info)).expect("setup");
    get_logger("main").info("new run");
    logging.flush().expect("Failed to flush");

    let resolved = logging.log_path().expect("file mode").to_path_buf();
    assert_ne!(resolved, original);
    assert_eq!(resolved.parent(), Some(temp_dir.path()));
    let name = resolved
        .file_name()
        .and_then(|name| name.to_str())
        .expect("utf-8 name");
    assert!(name.starts_with("app-"), "unexpected name {name}");
    assert!(name.ends_with(".log"), "unexpected name {name}");
    NaiveDateTime::parse_from_str(&name["app-".len().."app-".len() + 19], "%Y-%m-%d-%H-%M-%S")
        .expect("suffix should be a timestamp");

    assert_eq!(read(&original), "previous run\n");
    assert!(read(&resolved).ends_with("new run\n"));
}

#[test]
fn test_console_only_creates_no_file() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_dir = temp_dir.path().join("never_created");

    let options = LoggerOptions::new()
        .with_log_dir(&log_dir)
        .with_level(LogLevel::Debug);
    let logging = setup_logger(&options).expect("setup");
    get_logger("main").info("console only");
    tee_println!("console only print");

    assert!(logging.log_path().is_none());
    assert!(!log_dir.exists());
    let target = stdout_target().expect("target installed");
    assert!(!target.has_file());
    assert_eq!(root_logger_names(), vec!["console".to_string()]);
}

#[test]
fn test_threshold_applies_to_every_call_style() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let logging = setup_logger(&file_options(temp_dir.path(), "warn.log", LogLevel::Warning))
        .expect("setup");
    let logger = get_logger("main");
    logger.info("hidden info");
    log::info!("hidden facade info");
    log::debug!("hidden facade debug");
    logger.warning("shown warning");
    log::error!("shown facade error");
    tee_logger::critical!(logger, "shown critical");
    logging.flush().expect("Failed to flush");

    let content = read(logging.log_path().expect("file mode"));
    assert!(!content.contains("hidden"));
    assert_eq!(content.lines().count(), 3, "content was: {content}");
    assert!(content.contains(" | WARNING | main | shown warning"));
    assert!(content.contains(" | ERROR | "));
    assert!(content.contains(" | CRITICAL | main | shown critical"));
    assert!(!log::log_enabled!(log::Level::Info));
}

#[test]
fn test_threshold_applies_to_both_sinks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let console = SharedBuffer::default();
    let options = file_options(temp_dir.path(), "sinks.log", LogLevel::Warning);
    let logging =
        Logging::with_console(&options, Box::new(console.clone())).expect("Failed to set up");

    let logger = logging.logger("main");
    logger.info("below threshold");
    tee_logger::info!(logger, "below threshold via macro");
    logger.warning("at threshold");
    logging.flush().expect("Failed to flush");

    let file = read(logging.log_path().expect("file mode"));
    for (sink, content) in [("console", console.contents()), ("file", file)] {
        assert!(!content.contains("below threshold"), "{sink} was: {content}");
        assert_eq!(content.lines().count(), 1, "{sink} was: {content}");
        assert!(
            content.contains(" | WARNING | main | at threshold"),
            "{sink} was: {content}"
        );
    }
    assert_eq!(logging.root().metrics().filtered_count(), 2);
}

#[test]
fn test_repeated_setup_keeps_single_handlers() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let first =
        setup_logger(&file_options(temp_dir.path(), "first.log", LogLevel::Info)).expect("setup");
    let second =
        setup_logger(&file_options(temp_dir.path(), "second.log", LogLevel::Info)).expect("setup");
    assert_eq!(configuration_state(), ConfigurationState::Reconfigured);

    assert_eq!(
        root_logger_names(),
        vec!["console".to_string(), "file".to_string()]
    );

    get_logger("main").info("only once");
    tee_println!("printed after reconfigure");
    second.flush().expect("Failed to flush");

    let first_content = read(first.log_path().expect("file mode"));
    let second_content = read(second.log_path().expect("file mode"));
    assert!(first_content.is_empty(), "first file got: {first_content}");
    assert_eq!(second_content.matches("only once").count(), 1);
    assert!(second_content.contains("printed after reconfigure\n"));
}

#[test]
fn test_flush_makes_writes_durable() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let logging =
        setup_logger(&file_options(temp_dir.path(), "durable.log", LogLevel::Info)).expect("setup");
    let writer = stdout_target().expect("target installed");

    let mut written = 0u64;
    for i in 0..20 {
        let text = format!("line {i}\n");
        writer.write(&text).expect("write");
        written += text.len() as u64;
    }
    writer.flush().expect("flush");

    let len = fs::metadata(logging.log_path().expect("file mode"))
        .expect("metadata")
        .len();
    assert_eq!(len, written);
}

#[cfg(feature = "color")]
#[test]
fn test_color_modes_for_file_output() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let always = setup_logger(
        &file_options(temp_dir.path(), "always.log", LogLevel::Info).with_color(ColorMode::Always),
    )
    .expect("setup");
    get_logger("main").warning("colored");
    always.flush().expect("Failed to flush");
    assert!(read(always.log_path().expect("file mode")).contains("\x1b[33mWARNING\x1b[0m"));

    let auto = setup_logger(
        &file_options(temp_dir.path(), "auto.log", LogLevel::Info).with_color(ColorMode::Auto),
    )
    .expect("setup");
    get_logger("main").warning("plain");
    auto.flush().expect("Failed to flush");
    assert!(!read(auto.log_path().expect("file mode")).contains('\x1b'));
}

#[test]
fn test_invalid_directory_propagates() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "a file").expect("seed");

    let err = setup_logger(&file_options(&blocker.join("logs"), "app.log", LogLevel::Info))
        .expect_err("should fail");
    assert!(matches!(err, LoggerError::DirectoryCreation { .. }));
}

fn root_logger_names() -> Vec<String> {
    tee_logger::root_logger().handler_names()
}
