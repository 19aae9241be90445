//! # Connection Fakes
//!
//! Fakes implementing [`Conn`](crate::conn::Conn) for driver unit tests:
//!
//! - [`RecordRaw`] forwards everything written to it to an `io::Write` sink.
//! - [`Record`] logs every transaction, optionally passing it through to a
//!   real connection first.
//! - [`Playback`] replays a recorded log and rejects calls that deviate
//!   from it.
//!
//! A trace captured with [`Record`] can be persisted with [`Trace`] and fed
//! back to [`Playback`] in later test runs.

pub mod io;
pub mod playback;
pub mod record;
pub mod record_raw;
pub mod trace;

pub use io::Io;
pub use playback::Playback;
pub use record::Record;
pub use record_raw::RecordRaw;
pub use trace::Trace;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks `m`, recovering the guard if a previous holder panicked.
///
/// The fakes only mutate their state after every check has passed, so a
/// poisoned lock still guards a consistent value.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
