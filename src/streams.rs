//! # Byte Streams
//!
//! Sequential and random-access I/O handles returned by
//! [`FsStreams`](crate::FsStreams).
//!
//! ## Overview
//!
//! A stream is a single-owner, `Send`-but-not-`Sync` object: exactly one
//! caller drives it, so there is no need to synchronize reads/writes
//! against each other the way [`FileSystem`](crate::FileSystem) methods
//! must. Every stream has an explicit open/closed state machine (spec
//! §4.7): operations after [`close`](ByteStream::close) return
//! [`FsError::StreamClosed`], and `close` itself is idempotent.
//!
//! ## Example
//!
//! ```rust
//! use vfs_contract::{ByteStream, FsError};
//!
//! fn drain(mut stream: Box<dyn ByteStream>) -> Result<Vec<u8>, FsError> {
//!     let mut buf = Vec::new();
//!     let mut chunk = [0u8; 4096];
//!     loop {
//!         let n = stream.read(&mut chunk)?;
//!         if n == 0 {
//!             break;
//!         }
//!         buf.extend_from_slice(&chunk[..n]);
//!     }
//!     stream.close()?;
//!     Ok(buf)
//! }
//! ```

use crate::FsError;

/// A sequential, forward-only byte reader.
///
/// Returned by [`FsStreams::open_input_stream`](crate::FsStreams::open_input_stream).
/// `read` behaves like `std::io::Read::read`: it returns `Ok(0)` at
/// end-of-file rather than an error, and may return fewer bytes than the
/// buffer holds even before EOF.
///
/// # Object Safety
///
/// This trait is object-safe and used as `Box<dyn ByteStream + Send>`.
///
/// # Thread Safety
///
/// Intentionally `Send` but not `Sync` — a stream has exactly one owner at
/// a time and is not safe to call concurrently from multiple threads.
pub trait ByteStream: Send {
    /// Read up to `buf.len()` bytes, returning the number of bytes read.
    /// `Ok(0)` means end-of-file.
    ///
    /// # Errors
    ///
    /// - [`FsError::StreamClosed`] if the stream has been closed.
    /// - [`FsError::Backend`] on a backend I/O failure.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, FsError>;

    /// Close the stream, releasing any backend resources.
    ///
    /// Idempotent: closing an already-closed stream is a no-op that
    /// returns `Ok(())`.
    fn close(&mut self) -> Result<(), FsError>;

    /// Returns `true` if [`close`](Self::close) has already been called.
    fn is_closed(&self) -> bool;
}

/// A random-access byte reader over a file whose size is known up front.
///
/// Returned by [`FsStreams::open_input_file`](crate::FsStreams::open_input_file).
/// Unlike [`ByteStream`], reads do not need to be sequential.
pub trait RandomReader: Send {
    /// Total size of the underlying file in bytes.
    fn size(&self) -> Result<u64, FsError>;

    /// Read up to `buf.len()` bytes starting at `offset`, returning the
    /// number of bytes read. Reading at or past `size()` returns `Ok(0)`.
    ///
    /// # Errors
    ///
    /// - [`FsError::StreamClosed`] if the stream has been closed.
    /// - [`FsError::Backend`] on a backend I/O failure.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, FsError>;

    /// Close the reader, releasing any backend resources. Idempotent.
    fn close(&mut self) -> Result<(), FsError>;

    /// Returns `true` if [`close`](Self::close) has already been called.
    fn is_closed(&self) -> bool;
}

/// A sequential, write-only byte stream.
///
/// Returned by [`FsStreams::open_output_stream`](crate::FsStreams::open_output_stream)
/// and [`FsStreams::open_append_stream`](crate::FsStreams::open_append_stream).
/// Writes are not guaranteed durable until [`close`](Self::close) returns
/// `Ok`.
pub trait ByteWriter: Send {
    /// Write all of `buf` to the stream.
    ///
    /// # Errors
    ///
    /// - [`FsError::StreamClosed`] if the stream has been closed.
    /// - [`FsError::Backend`] on a backend I/O failure.
    fn write(&mut self, buf: &[u8]) -> Result<(), FsError>;

    /// Current write position: bytes written so far in this session plus,
    /// for an append stream, the file's size at open time. `0` on a fresh
    /// output stream.
    ///
    /// # Errors
    ///
    /// - [`FsError::StreamClosed`] if the stream has been closed.
    fn tell(&self) -> Result<u64, FsError>;

    /// Flush any internally buffered data to the backend without closing
    /// the stream.
    ///
    /// # Errors
    ///
    /// - [`FsError::StreamClosed`] if the stream has been closed.
    fn flush(&mut self) -> Result<(), FsError>;

    /// Close the stream, committing any buffered writes. Idempotent: a
    /// second `close` call is a no-op that returns `Ok(())`.
    fn close(&mut self) -> Result<(), FsError>;

    /// Returns `true` if [`close`](Self::close) has already been called.
    fn is_closed(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnceStream {
        closed: bool,
        served: bool,
    }

    impl ByteStream for OnceStream {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, FsError> {
            if self.closed {
                return Err(FsError::StreamClosed);
            }
            if self.served {
                return Ok(0);
            }
            self.served = true;
            let data = b"hi";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }

        fn close(&mut self) -> Result<(), FsError> {
            self.closed = true;
            Ok(())
        }

        fn is_closed(&self) -> bool {
            self.closed
        }
    }

    #[test]
    fn byte_stream_is_object_safe() {
        fn _check(_: &dyn ByteStream) {}
    }

    #[test]
    fn random_reader_is_object_safe() {
        fn _check(_: &dyn RandomReader) {}
    }

    #[test]
    fn byte_writer_is_object_safe() {
        fn _check(_: &dyn ByteWriter) {}
    }

    #[test]
    fn stream_traits_require_send() {
        fn _assert_send<T: Send>() {}
        fn _check_stream<T: ByteStream>() {
            _assert_send::<T>();
        }
        fn _check_reader<T: RandomReader>() {
            _assert_send::<T>();
        }
        fn _check_writer<T: ByteWriter>() {
            _assert_send::<T>();
        }
    }

    #[test]
    fn reading_past_eof_returns_zero() {
        let mut s = OnceStream {
            closed: false,
            served: false,
        };
        let mut buf = [0u8; 16];
        assert_eq!(s.read(&mut buf).unwrap(), 2);
        assert_eq!(s.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn reading_after_close_errors() {
        let mut s = OnceStream {
            closed: false,
            served: false,
        };
        s.close().unwrap();
        assert!(s.is_closed());
        assert!(matches!(
            s.read(&mut [0u8; 4]),
            Err(FsError::StreamClosed)
        ));
    }

    #[test]
    fn close_is_idempotent() {
        let mut s = OnceStream {
            closed: false,
            served: false,
        };
        assert!(s.close().is_ok());
        assert!(s.close().is_ok());
    }
}
