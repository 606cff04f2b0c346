//! Console-only example
//!
//! Same calls as `console_and_file`, without a log file.
//!
//! Run with: cargo run --example console_only

#[path = "helpers.rs"]
mod helpers;

use tee_logger::prelude::*;
use tee_logger::tee_println;

fn main() -> Result<()> {
    let _logging = setup_logger(&LoggerOptions::new().console_only().with_level(LogLevel::Debug))?;
    let logger = get_logger(module_path!());

    tee_println!("This is a print message from main.");

    logger.info("This is a info message from main Logger::info()");
    logger.debug("This is a debug message from main Logger::debug()");

    log::info!("This is a info message from main log::info!()");
    log::debug!("This is a debug message from main log::debug!()");

    helpers::func_with_logger();
    helpers::func_with_logging();
    helpers::func_with_print();

    Ok(())
}
