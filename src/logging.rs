use log::{error, info, log_enabled, Level};

/// Initializes the logger with the `env_logger` crate.
///
/// Panics if a logger is already installed; tests should use
/// [`try_init_logger`] instead.
pub fn init_logger() {
    env_logger::init();
}

/// Initializes a test-friendly logger, ignoring repeated calls.
///
/// Output is captured by the test harness and filtered through `RUST_LOG`.
pub fn try_init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Logs an error message.
pub fn log_error(message: &str) {
    if log_enabled!(Level::Error) {
        error!("{message}");
    }
}

/// Logs an informational message.
pub fn log_info(message: &str) {
    if log_enabled!(Level::Info) {
        info!("{message}");
    }
}
