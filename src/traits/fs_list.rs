//! Selector-driven directory listing.

use crate::{FileStat, FsError, Selector};

/// List the entries matching a [`Selector`].
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsList`.
pub trait FsList: Send + Sync {
    /// Return the `FileStat` of every entry matching `selector`.
    ///
    /// `selector.base_dir` itself is never included in the result (spec
    /// §4.2). Non-recursive listings return only direct children;
    /// recursive listings descend up to `selector.max_recursion` levels.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if `selector.base_dir` does not exist and
    ///   `selector.allow_non_existent` is `false`.
    /// - [`FsError::NotADirectory`] if `selector.base_dir` exists but is
    ///   not a directory.
    fn list(&self, selector: &Selector) -> Result<Vec<FileStat>, FsError>;
}
