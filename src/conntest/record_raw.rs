//! Pass-through fake that sends everything written to it to a writer.

use super::lock;
use crate::conn::Conn;
use crate::error::{ConnError, Result};
use crate::util::logging::log_io_hex;
use std::fmt;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// Implements [`Conn`] by forwarding every write to `W`.
///
/// The whole buffer is handed to the sink; a sink that stops accepting bytes
/// surfaces as [`ConnError::Io`].
///
/// Reads cannot be simulated: any transaction with a non-empty read buffer
/// fails with [`ConnError::ReadNotImplemented`]. The sink is serialized by an
/// internal lock so concurrent writers never interleave within one call.
///
/// `W` can be a borrowed writer such as `&mut Vec<u8>` when the caller keeps
/// ownership of the sink.
pub struct RecordRaw<W> {
    sink: Mutex<W>,
}

impl<W: Write + Send> RecordRaw<W> {
    pub fn new(sink: W) -> Self {
        RecordRaw {
            sink: Mutex::new(sink),
        }
    }

    /// Locks the sink for inspection.
    pub fn sink(&self) -> MutexGuard<'_, W> {
        lock(&self.sink)
    }

    /// Consumes the fake and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W> fmt::Display for RecordRaw<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("recordraw")
    }
}

impl<W> fmt::Debug for RecordRaw<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordRaw").finish_non_exhaustive()
    }
}

impl<W: Write + Send> Conn for RecordRaw<W> {
    fn write(&self, data: &[u8]) -> Result<usize> {
        let mut sink = lock(&self.sink);
        sink.write_all(data)?;
        log_io_hex("write", "recordraw", data, &[]);
        Ok(data.len())
    }

    fn tx(&self, w: &[u8], r: &mut [u8]) -> Result<()> {
        if !r.is_empty() {
            return Err(ConnError::ReadNotImplemented);
        }
        self.write(w).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Writer that accepts at most `limit` bytes per call.
    struct ShortWriter {
        limit: usize,
        data: Vec<u8>,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.limit);
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "Test error"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_forwards_bytes() {
        let raw = RecordRaw::new(Vec::new());
        assert_eq!(raw.write(&[0x10, 0x5b, 0xfe]).unwrap(), 3);
        assert_eq!(raw.write(&[0x16]).unwrap(), 1);
        assert_eq!(raw.into_inner(), vec![0x10, 0x5b, 0xfe, 0x16]);
    }

    #[test]
    fn test_borrowed_sink() {
        let mut out = Vec::new();
        {
            let raw = RecordRaw::new(&mut out);
            raw.tx(&[0x01, 0x02], &mut []).unwrap();
            assert_eq!(raw.sink().as_slice(), &[0x01, 0x02]);
        }
        assert_eq!(out, vec![0x01, 0x02]);
    }

    #[test]
    fn test_tx_with_read_not_implemented() {
        let raw = RecordRaw::new(Vec::new());
        let mut r = [0u8; 2];
        let result = raw.tx(&[0x01], &mut r);
        assert!(matches!(result, Err(ConnError::ReadNotImplemented)));
        assert!(raw.into_inner().is_empty());
    }

    #[test]
    fn test_short_writes_deliver_full_buffer() {
        let raw = RecordRaw::new(ShortWriter {
            limit: 2,
            data: Vec::new(),
        });
        assert_eq!(raw.write(&[1, 2, 3, 4, 5]).unwrap(), 5);
        raw.tx(&[6, 7, 8], &mut []).unwrap();
        assert_eq!(raw.into_inner().data, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_stalled_sink_fails_tx() {
        let raw = RecordRaw::new(ShortWriter {
            limit: 0,
            data: Vec::new(),
        });
        match raw.tx(&[1, 2, 3, 4], &mut []) {
            Err(ConnError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::WriteZero),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(raw.into_inner().data.is_empty());
    }

    #[test]
    fn test_sink_error_propagated() {
        let raw = RecordRaw::new(BrokenWriter);
        assert!(matches!(raw.write(&[0x01]), Err(ConnError::Io(_))));
        assert!(matches!(raw.tx(&[0x01], &mut []), Err(ConnError::Io(_))));
    }

    #[test]
    fn test_label() {
        assert_eq!(RecordRaw::new(Vec::new()).to_string(), "recordraw");
    }
}
