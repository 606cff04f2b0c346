//! Console and file example
//!
//! Sends prints, named-logger records and `log` facade records to the console
//! and to `./output/example1.log`.
//!
//! Run with: cargo run --example console_and_file

#[path = "helpers.rs"]
mod helpers;

use tee_logger::prelude::*;
use tee_logger::tee_println;

fn main() -> Result<()> {
    let logging = setup_logger(
        &LoggerOptions::new()
            .with_log_dir("./output")
            .with_log_file("example1.log")
            .with_level(LogLevel::Debug)
            .with_format(RecordFormat::Extended),
    )?;
    let logger = get_logger(module_path!());

    tee_println!("This is a print message from main.");

    tee_logger::info!(logger, "This is a info message from main info!()");
    tee_logger::debug!(logger, "This is a debug message from main debug!()");
    tee_logger::warning!(logger, "This is a warning message from main warning!()");

    log::info!("This is a info message from main log::info!()");
    log::debug!("This is a debug message from main log::debug!()");

    helpers::func_with_logger();
    helpers::func_with_logging();
    helpers::func_with_print();

    logging.flush()?;
    if let Some(path) = logging.log_path() {
        tee_println!("Log written to {}", path.display());
    }
    Ok(())
}
