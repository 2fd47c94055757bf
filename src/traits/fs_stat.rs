//! Single- and batch-path status queries.

use crate::{FileStat, FsError, VfsPath};

/// Query the status of one or more paths.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access. Backends should use interior mutability (`RwLock`,
/// `Mutex`) for thread-safe state management.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsStat`.
pub trait FsStat: Send + Sync {
    /// Get the status of a single path.
    ///
    /// A path that does not exist is not an error: it returns
    /// `FileStat::non_existent(path)` (spec §4.1).
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidPath`] if `path` is malformed. This cannot
    ///   happen for a well-formed [`VfsPath`], since construction already
    ///   validates it.
    /// - [`FsError::Backend`] on a backend I/O failure.
    fn stat(&self, path: &VfsPath) -> Result<FileStat, FsError>;

    /// Get the status of several paths at once.
    ///
    /// The default implementation calls [`stat`](Self::stat) once per
    /// path. Backends whose transport supports batching (e.g. a single
    /// request for many keys) should override this for efficiency; the
    /// *i*-th result must correspond to the *i*-th input path regardless
    /// of implementation.
    ///
    /// # Errors
    ///
    /// Same as [`stat`](Self::stat), reported per path.
    fn stat_many(&self, paths: &[VfsPath]) -> Result<Vec<FileStat>, FsError> {
        paths.iter().map(|path| self.stat(path)).collect()
    }
}
