//! Directory creation and deletion.

use crate::{FsError, VfsPath};

/// Create and remove directories.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsDirOps`.
pub trait FsDirOps: Send + Sync {
    /// Create a directory at `path`.
    ///
    /// When `recursive` is `true`, missing ancestors are created along
    /// the way (`mkdir -p`). When `false`, the parent of `path` must
    /// already exist as a directory (plain `mkdir`).
    ///
    /// Idempotent either way: creating a directory that already exists
    /// succeeds (spec §4.5).
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if `recursive` is `false` and the parent
    ///   of `path` does not exist.
    /// - [`FsError::NotADirectory`] if an ancestor of `path` exists but
    ///   is a file.
    /// - [`FsError::AlreadyExists`] if `path` exists as a file.
    fn create_dir(&self, path: &VfsPath, recursive: bool) -> Result<(), FsError>;

    /// Remove the directory at `path` and everything beneath it.
    ///
    /// A backend must refuse to delete its own root (spec §4.5): `path`
    /// being the root is a precondition violation, not a silent
    /// whole-filesystem wipe. Use
    /// [`delete_dir_contents`](Self::delete_dir_contents) with the root
    /// path for that.
    ///
    /// # Errors
    ///
    /// - [`FsError::PreconditionViolation`] if `path` is the root.
    /// - [`FsError::NotFound`] if `path` does not exist.
    /// - [`FsError::NotADirectory`] if `path` is a file.
    fn delete_dir(&self, path: &VfsPath) -> Result<(), FsError>;

    /// Remove everything beneath `path`, leaving `path` itself in place
    /// as an empty directory.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if `path` does not exist.
    /// - [`FsError::NotADirectory`] if `path` is a file.
    fn delete_dir_contents(&self, path: &VfsPath) -> Result<(), FsError>;
}
