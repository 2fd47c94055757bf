//! File deletion, moving, and copying.

use crate::{FsError, VfsPath};

/// Delete, move, and copy files.
///
/// `move_path` corresponds to the contract's `move` operation; it is
/// renamed here because `move` is a reserved word in Rust.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsFileOps`.
pub trait FsFileOps: Send + Sync {
    /// Delete the file at `path`.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if `path` does not exist.
    /// - [`FsError::NotAFile`] if `path` is a directory.
    fn delete_file(&self, path: &VfsPath) -> Result<(), FsError>;

    /// Delete several files, continuing past individual failures.
    ///
    /// The default implementation calls [`delete_file`](Self::delete_file)
    /// once per path and collects the first error, if any, after
    /// attempting every path (spec's best-effort batch delete semantics).
    /// Backends with an atomic or transactional bulk-delete should
    /// override this.
    ///
    /// # Errors
    ///
    /// The first error encountered, after every path has been attempted.
    fn delete_files(&self, paths: &[VfsPath]) -> Result<(), FsError> {
        let mut first_err = None;
        for path in paths {
            if let Err(err) = self.delete_file(path) {
                if first_err.is_none() {
                    first_err = Some(err);
                }
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Move (rename) `src` to `dst`.
    ///
    /// Moving a directory requires
    /// [`CapabilityFlags::allow_move_dir`](crate::CapabilityFlags::allow_move_dir).
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if `src` does not exist.
    /// - [`FsError::PreconditionViolation`] if `dst` is `src` or a
    ///   descendant of `src` (spec §4.3).
    /// - [`FsError::NotSupported`] if `src` is a directory and the
    ///   backend does not allow moving directories.
    fn move_path(&self, src: &VfsPath, dst: &VfsPath) -> Result<(), FsError>;

    /// Copy the file at `src` to `dst`.
    ///
    /// Copying a directory is out of scope; only files are copied (spec
    /// §4.4).
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if `src` does not exist.
    /// - [`FsError::NotAFile`] if `src` is a directory.
    fn copy_file(&self, src: &VfsPath, dst: &VfsPath) -> Result<(), FsError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Tracking {
        deleted: Mutex<Vec<VfsPath>>,
        fail_on: &'static str,
    }

    impl FsFileOps for Tracking {
        fn delete_file(&self, path: &VfsPath) -> Result<(), FsError> {
            if path.as_str() == self.fail_on {
                return Err(FsError::NotFound { path: path.clone() });
            }
            self.deleted.lock().unwrap().push(path.clone());
            Ok(())
        }

        fn move_path(&self, _src: &VfsPath, _dst: &VfsPath) -> Result<(), FsError> {
            Ok(())
        }

        fn copy_file(&self, _src: &VfsPath, _dst: &VfsPath) -> Result<(), FsError> {
            Ok(())
        }
    }

    #[test]
    fn fs_file_ops_is_object_safe() {
        fn _check(_: &dyn FsFileOps) {}
    }

    #[test]
    fn fs_file_ops_requires_send_sync() {
        fn _assert_send_sync<T: Send + Sync>() {}
        fn _check<T: FsFileOps>() {
            _assert_send_sync::<T>();
        }
    }

    #[test]
    fn default_delete_files_is_best_effort() {
        let fs = Tracking {
            deleted: Mutex::new(Vec::new()),
            fail_on: "b",
        };
        let paths = vec![
            VfsPath::parse("a").unwrap(),
            VfsPath::parse("b").unwrap(),
            VfsPath::parse("c").unwrap(),
        ];
        let result = fs.delete_files(&paths);
        assert!(result.is_err());
        let deleted = fs.deleted.lock().unwrap();
        assert_eq!(deleted.len(), 2);
        assert!(deleted.iter().any(|p| p.as_str() == "a"));
        assert!(deleted.iter().any(|p| p.as_str() == "c"));
    }
}
