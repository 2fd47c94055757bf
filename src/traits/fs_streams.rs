//! Opening byte streams for reading and writing.

use crate::{ByteStream, ByteWriter, FsError, RandomReader, VfsPath};

/// Open byte streams against files.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. The streams this trait
/// returns are themselves only `Send`; see [`ByteStream`] for why.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsStreams`.
pub trait FsStreams: Send + Sync {
    /// Open `path` for sequential reading.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if `path` does not exist.
    /// - [`FsError::NotAFile`] if `path` is a directory.
    fn open_input_stream(&self, path: &VfsPath) -> Result<Box<dyn ByteStream>, FsError>;

    /// Open `path` for random-access reading.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if `path` does not exist.
    /// - [`FsError::NotAFile`] if `path` is a directory.
    fn open_input_file(&self, path: &VfsPath) -> Result<Box<dyn RandomReader>, FsError>;

    /// Open `path` for writing, creating it if absent and truncating it
    /// if present.
    ///
    /// Writing to a path that is currently a directory requires
    /// [`CapabilityFlags::allow_write_file_over_dir`](crate::CapabilityFlags::allow_write_file_over_dir).
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if a parent directory of `path` does not
    ///   exist and the backend has no implicit directories.
    /// - [`FsError::PreconditionViolation`] if `path` is a directory and
    ///   the backend does not allow writing a file over a directory.
    fn open_output_stream(&self, path: &VfsPath) -> Result<Box<dyn ByteWriter>, FsError>;

    /// Open `path` for appending, creating it if absent.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotSupported`] if the backend does not support
    ///   appending (see
    ///   [`CapabilityFlags::allow_append_to_file`](crate::CapabilityFlags::allow_append_to_file)).
    /// - [`FsError::NotAFile`] if `path` is a directory.
    fn open_append_stream(&self, path: &VfsPath) -> Result<Box<dyn ByteWriter>, FsError>;
}
