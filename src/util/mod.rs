//! # Utility Modules
//!
//! Hex formatting and transaction logging helpers shared by the fakes and
//! the `conntest` binary.

pub mod hex;
pub mod logging;

pub use hex::{format_hex_compact, pretty_hex};
pub use logging::{log_io_hex, log_io_rejected};
