//! Recording fake: logs every transaction, optionally passing it through.

use super::{lock, Io, Playback};
use crate::conn::Conn;
use crate::error::{ConnError, Result};
use crate::util::logging::{log_io_hex, log_io_rejected};
use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Implements [`Conn`] and records everything written to it.
///
/// When an underlying connection is set, each transaction is forwarded to it
/// first and only recorded once it succeeds, so reads carry the real
/// device's response. Without one, only write-only transactions are
/// accepted.
///
/// The recorded log can then be fed to [`Playback`] for replay based tests.
#[derive(Default)]
pub struct Record {
    conn: Option<Arc<dyn Conn>>,
    ops: Mutex<Vec<Io>>,
}

impl Record {
    /// Creates a recorder with no underlying connection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that passes every transaction through to `conn`.
    pub fn with_conn(conn: Arc<dyn Conn>) -> Self {
        Record {
            conn: Some(conn),
            ops: Mutex::new(Vec::new()),
        }
    }

    /// Returns the underlying connection, if any.
    pub fn conn(&self) -> Option<&Arc<dyn Conn>> {
        self.conn.as_ref()
    }

    /// Returns a copy of the transactions recorded so far.
    pub fn ops(&self) -> Vec<Io> {
        lock(&self.ops).clone()
    }

    /// Number of recorded transactions.
    pub fn len(&self) -> usize {
        lock(&self.ops).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.ops).is_empty()
    }

    /// Removes and returns the recorded transactions.
    pub fn take_ops(&self) -> Vec<Io> {
        std::mem::take(&mut *lock(&self.ops))
    }

    /// Builds a [`Playback`] expecting exactly the recorded transactions.
    pub fn into_playback(self) -> Playback {
        let ops = self
            .ops
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Playback::new(ops)
    }

    /// Saves the recorded transactions as a JSON trace file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        super::Trace::new(self.ops()).save(path)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("record")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("conn", &self.conn.as_ref().map(|c| c.to_string()))
            .field("ops", &*lock(&self.ops))
            .finish()
    }
}

impl Conn for Record {
    fn write(&self, data: &[u8]) -> Result<usize> {
        self.tx(data, &mut [])?;
        Ok(data.len())
    }

    fn tx(&self, w: &[u8], r: &mut [u8]) -> Result<()> {
        let mut ops = lock(&self.ops);
        match &self.conn {
            Some(conn) => {
                if let Err(err) = conn.tx(w, r) {
                    log_io_rejected("record", &err);
                    return Err(err);
                }
            }
            None if !r.is_empty() => {
                let err = ConnError::ReadUnsupported;
                log_io_rejected("record", &err);
                return Err(err);
            }
            None => {}
        }
        log_io_hex("tx", "record", w, r);
        ops.push(Io::new(w, r));
        Ok(())
    }
}
