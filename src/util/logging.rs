//! # Transaction Logging Utilities
//!
//! Hex logging for transactions flowing through the fakes. Everything here
//! logs at `trace`/`debug` level under the `conntest::io` target, so it stays
//! silent unless enabled through `RUST_LOG`.

use crate::util::hex::format_hex_compact;

/// Limit hex output per buffer to prevent log spam
const MAX_LOG_BYTES: usize = 64;

fn truncated_hex(data: &[u8]) -> String {
    if data.len() > MAX_LOG_BYTES {
        format!(
            "{} ... ({} bytes total)",
            format_hex_compact(&data[..MAX_LOG_BYTES]),
            data.len()
        )
    } else {
        format_hex_compact(data)
    }
}

/// Log one transaction in hex format
///
/// `label` is the connection's display name.
pub fn log_io_hex(prefix: &str, label: &str, w: &[u8], r: &[u8]) {
    if !log::log_enabled!(target: "conntest::io", log::Level::Trace) {
        return;
    }
    log::trace!(
        target: "conntest::io",
        "{prefix} [{label}]: write=[{}] read=[{}]",
        truncated_hex(w),
        truncated_hex(r)
    );
}

/// Log a transaction that was rejected
pub fn log_io_rejected(label: &str, err: &crate::error::ConnError) {
    log::debug!(target: "conntest::io", "{label}: rejected transaction: {err}");
}
