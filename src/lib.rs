//! # conntest - Record and Playback Fakes for Device Connections
//!
//! The conntest crate provides test fakes for the synchronous byte-transaction
//! interface ([`Conn`]) that device drivers use to talk to hardware. Drivers
//! can be unit tested without a real bus by recording what they send, or by
//! replaying a previously captured exchange and checking they issue the same
//! calls.
//!
//! ## Features
//!
//! - [`RecordRaw`]: forward every write to an `io::Write` sink
//! - [`Record`]: log transactions, optionally passing them through to a real connection
//! - [`Playback`]: replay a recorded log and reject calls that deviate from it
//! - JSON trace files for keeping golden transaction logs next to the tests
//! - Logging through the `log` facade
//!
//! ## Usage
//!
//! ```rust
//! use conntest::{Conn, Io, Playback, Record};
//!
//! // Capture a trace.
//! let rec = Record::new();
//! rec.write(&[0xF4, 0xB7]).unwrap();
//!
//! // Replay it.
//! let play = rec.into_playback();
//! assert_eq!(play.ops(), vec![Io::write_only(&[0xF4, 0xB7])]);
//! play.write(&[0xF4, 0xB7]).unwrap();
//! play.close().unwrap();
//! ```

pub mod conn;
pub mod conntest;
pub mod error;
pub mod logging;
pub mod util;

pub use crate::conn::Conn;
pub use crate::conntest::{Io, Playback, Record, RecordRaw, Trace};
pub use crate::error::{ConnError, Result};
pub use crate::logging::{init_logger, log_error, log_info, try_init_logger};
