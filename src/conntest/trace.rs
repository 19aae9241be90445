//! # Trace Persistence
//!
//! A trace is the JSON form of a recorded transaction log:
//!
//! ```json
//! {
//!   "version": 1,
//!   "ops": [
//!     { "write": "d0", "read": "60" },
//!     { "write": "f4b7", "read": "" }
//!   ]
//! }
//! ```
//!
//! Traces captured with [`Record::save`](super::Record::save) are loaded
//! back with [`Playback::load`](super::Playback::load).

use super::Io;
use crate::error::{ConnError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current trace format version.
pub const TRACE_VERSION: u32 = 1;

/// A persisted sequence of transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub version: u32,
    #[serde(default)]
    pub ops: Vec<Io>,
}

impl Trace {
    pub fn new(ops: Vec<Io>) -> Self {
        Trace {
            version: TRACE_VERSION,
            ops,
        }
    }

    /// Total bytes written across all transactions.
    pub fn bytes_written(&self) -> usize {
        self.ops.iter().map(|io| io.write.len()).sum()
    }

    /// Total bytes read across all transactions.
    pub fn bytes_read(&self) -> usize {
        self.ops.iter().map(|io| io.read.len()).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let trace: Trace = serde_json::from_str(json)?;
        if trace.version != TRACE_VERSION {
            return Err(ConnError::Other(format!(
                "unsupported trace version {} (expected {TRACE_VERSION})",
                trace.version
            )));
        }
        Ok(trace)
    }

    /// Writes the trace to `path` as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path.as_ref(), json)?;
        log::debug!(
            "saved {} transactions to {}",
            self.ops.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let trace = Self::from_json(&json)?;
        log::debug!(
            "loaded {} transactions from {}",
            trace.ops.len(),
            path.as_ref().display()
        );
        Ok(trace)
    }
}

impl From<Vec<Io>> for Trace {
    fn from(ops: Vec<Io>) -> Self {
        Trace::new(ops)
    }
}
