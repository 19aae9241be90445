//! # Connection Interface
//!
//! The `Conn` trait is the half-duplex transaction interface device drivers
//! talk to. Real bus implementations and the fakes in [`crate::conntest`]
//! both implement it, so a driver can be handed either one.

use crate::error::Result;
use std::fmt;
use std::sync::Arc;

/// A synchronous byte-oriented connection to a device.
///
/// `Display` provides a short human-readable label for logs.
pub trait Conn: fmt::Display + Send + Sync {
    /// Writes `data` to the device, returning the number of bytes written.
    fn write(&self, data: &[u8]) -> Result<usize>;

    /// Writes `w` then reads `r.len()` bytes back into `r`.
    ///
    /// On success the contents of `r` are replaced with the response.
    fn tx(&self, w: &[u8], r: &mut [u8]) -> Result<()>;
}

impl<T: Conn + ?Sized> Conn for &T {
    fn write(&self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn tx(&self, w: &[u8], r: &mut [u8]) -> Result<()> {
        (**self).tx(w, r)
    }
}

impl<T: Conn + ?Sized> Conn for Box<T> {
    fn write(&self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn tx(&self, w: &[u8], r: &mut [u8]) -> Result<()> {
        (**self).tx(w, r)
    }
}

impl<T: Conn + ?Sized> Conn for Arc<T> {
    fn write(&self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn tx(&self, w: &[u8], r: &mut [u8]) -> Result<()> {
        (**self).tx(w, r)
    }
}
