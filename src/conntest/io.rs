//! Transaction record shared by [`Record`](super::Record) and
//! [`Playback`](super::Playback).

use serde::{Deserialize, Serialize};

/// The I/O that happened in one transaction on a real or fake connection.
///
/// Both buffers serialize as lowercase hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Io {
    /// Bytes sent to the device.
    #[serde(with = "hex")]
    pub write: Vec<u8>,
    /// Bytes returned by the device in the same exchange.
    #[serde(with = "hex", default)]
    pub read: Vec<u8>,
}

impl Io {
    /// Creates a record by copying both buffers.
    pub fn new(write: &[u8], read: &[u8]) -> Self {
        Io {
            write: write.to_vec(),
            read: read.to_vec(),
        }
    }

    /// Creates a write-only record.
    pub fn write_only(write: &[u8]) -> Self {
        Io::new(write, &[])
    }
}
