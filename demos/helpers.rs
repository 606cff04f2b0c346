//! Functions shared by the demos, one per output style

use tee_logger::tee_println;

/// Uses a named logger handle
pub fn func_with_logger() {
    let logger = tee_logger::get_logger("helpers");
    tee_logger::info!(logger, "This is an info message from func_with_logger()");
    tee_logger::debug!(logger, "This is a debug message from func_with_logger()");
}

/// Uses the `log` crate facade
pub fn func_with_logging() {
    log::info!("This is an info message from func_with_logging()");
    log::debug!("This is a debug message from func_with_logging()");
}

/// Prints through the installed stdout target
pub fn func_with_print() {
    tee_println!("This is a print message from func_with_print()");
}
