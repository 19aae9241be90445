//! Playback fake: replays a recorded I/O flow.

use super::{lock, Io, Trace};
use crate::conn::Conn;
use crate::error::{ConnError, Result};
use crate::util::logging::{log_io_hex, log_io_rejected};
use std::collections::VecDeque;
use std::fmt;
use std::path::Path;
use std::sync::Mutex;

/// Implements [`Conn`] and plays back a recorded I/O flow.
///
/// Each call must match the next expected transaction: identical write bytes
/// and a read buffer of the expected length. On a match the expected read
/// bytes are copied into the caller's buffer and the transaction is consumed.
/// A mismatch is reported and leaves the log untouched.
///
/// While "replay" type of unit tests are of limited value, they still present
/// an easy way to do basic code coverage.
#[derive(Default)]
pub struct Playback {
    ops: Mutex<VecDeque<Io>>,
}

impl Playback {
    pub fn new<I: IntoIterator<Item = Io>>(ops: I) -> Self {
        Playback {
            ops: Mutex::new(ops.into_iter().collect()),
        }
    }

    /// Loads the expected transactions from a JSON trace file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Trace::load(path)?.ops))
    }

    /// Number of expected transactions not yet issued.
    pub fn remaining(&self) -> usize {
        lock(&self.ops).len()
    }

    pub fn is_exhausted(&self) -> bool {
        lock(&self.ops).is_empty()
    }

    /// Returns a copy of the transactions still expected.
    pub fn ops(&self) -> Vec<Io> {
        lock(&self.ops).iter().cloned().collect()
    }

    /// Verifies every expected transaction was issued.
    pub fn close(&self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(ConnError::Unconsumed(n)),
        }
    }
}

impl fmt::Display for Playback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("playback")
    }
}

impl fmt::Debug for Playback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playback")
            .field("ops", &*lock(&self.ops))
            .finish()
    }
}

fn check(expected: Option<&Io>, w: &[u8], r: &[u8]) -> Result<()> {
    let expected = expected.ok_or(ConnError::UnexpectedTx)?;
    if expected.write != w {
        return Err(ConnError::WriteMismatch {
            actual: w.to_vec(),
            expected: expected.write.clone(),
        });
    }
    if expected.read.len() != r.len() {
        return Err(ConnError::ReadLengthMismatch {
            actual: r.len(),
            expected: expected.read.len(),
        });
    }
    Ok(())
}

impl Conn for Playback {
    fn write(&self, data: &[u8]) -> Result<usize> {
        self.tx(data, &mut [])?;
        Ok(data.len())
    }

    fn tx(&self, w: &[u8], r: &mut [u8]) -> Result<()> {
        let mut ops = lock(&self.ops);
        if let Err(err) = check(ops.front(), w, r) {
            log_io_rejected("playback", &err);
            return Err(err);
        }
        if let Some(io) = ops.pop_front() {
            r.copy_from_slice(&io.read);
            log_io_hex("tx", "playback", w, r);
        }
        Ok(())
    }
}
