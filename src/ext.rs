//! # Extension Traits
//!
//! Convenience methods layered on top of [`FileSystem`].
//!
//! ## Overview
//!
//! [`FsExt`] provides commonly-needed utility methods that aren't part of
//! the core trait hierarchy because they're fully derivable from it. These
//! are default methods with a blanket implementation, so any `FileSystem`
//! backend gets them for free.
//!
//! ## Available Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`exists`](FsExt::exists) | Check whether a path exists at all |
//! | [`is_file`](FsExt::is_file) | Check if path is a regular file |
//! | [`is_dir`](FsExt::is_dir) | Check if path is a directory |
//! | [`file_size`](FsExt::file_size) | Get a file's size in bytes |
//! | [`read_to_end`](FsExt::read_to_end) | Read an entire file into a `Vec<u8>` |
//! | [`write_all`](FsExt::write_all) | Write an entire byte slice to a file |
//!
//! ## JSON Support (Feature-Gated)
//!
//! With the `serde` feature enabled, [`FsExtJson`] adds:
//!
//! | Method | Description |
//! |--------|-------------|
//! | `read_json` | Read and deserialize a JSON file |
//! | `write_json` | Serialize and write a JSON file |
//!
//! Enable with:
//! ```toml
//! [dependencies]
//! vfs-contract = { version = "0.1", features = ["serde"] }
//! ```

use crate::{FileSystem, FsError, VfsPath};

/// Extension methods for any [`FileSystem`] backend.
///
/// All methods have default implementations built from the core trait,
/// so backends get them automatically — there is nothing to implement.
///
/// # Example
///
/// ```rust
/// use vfs_contract::{FileSystem, FsExt, FsError, VfsPath};
///
/// fn check_paths<FS: FileSystem>(fs: &FS) -> Result<(), FsError> {
///     let config = VfsPath::parse("config.json")?;
///     if fs.is_file(&config)? {
///         println!("config exists");
///     }
///     Ok(())
/// }
/// ```
pub trait FsExt: FileSystem {
    /// Check whether anything exists at `path`.
    ///
    /// Returns `Ok(false)` rather than an error when `path` is absent.
    fn exists(&self, path: &VfsPath) -> Result<bool, FsError> {
        Ok(!self.stat(path)?.is_non_existent())
    }

    /// Check if `path` points to a regular file.
    ///
    /// Returns `Ok(false)` if the path doesn't exist or is some other
    /// type. Returns `Err` only for actual backend failures.
    fn is_file(&self, path: &VfsPath) -> Result<bool, FsError> {
        Ok(self.stat(path)?.is_file())
    }

    /// Check if `path` points to a directory.
    ///
    /// Returns `Ok(false)` if the path doesn't exist or is some other
    /// type. Returns `Err` only for actual backend failures.
    fn is_dir(&self, path: &VfsPath) -> Result<bool, FsError> {
        Ok(self.stat(path)?.is_dir())
    }

    /// Get the size of a file in bytes.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if `path` doesn't exist.
    /// - [`FsError::NotAFile`] if `path` is a directory.
    fn file_size(&self, path: &VfsPath) -> Result<u64, FsError> {
        let stat = self.stat(path)?;
        if !stat.is_file() {
            return Err(FsError::NotAFile { path: path.clone() });
        }
        stat.size.ok_or(FsError::NotAFile { path: path.clone() })
    }

    /// Read an entire file's contents into a `Vec<u8>`.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if `path` doesn't exist.
    /// - [`FsError::NotAFile`] if `path` is a directory.
    fn read_to_end(&self, path: &VfsPath) -> Result<Vec<u8>, FsError> {
        let mut stream = self.open_input_stream(path)?;
        let mut buf = Vec::new();
        let mut chunk = [0u8; 8192];
        loop {
            let n = stream.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        stream.close()?;
        Ok(buf)
    }

    /// Write an entire byte slice to `path`, creating or truncating it.
    ///
    /// # Errors
    ///
    /// See [`FsStreams::open_output_stream`](crate::FsStreams::open_output_stream).
    fn write_all(&self, path: &VfsPath, data: &[u8]) -> Result<(), FsError> {
        let mut stream = self.open_output_stream(path)?;
        stream.write(data)?;
        stream.close()
    }
}

impl<B: FileSystem + ?Sized> FsExt for B {}

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde::{de::DeserializeOwned, Serialize};

    /// JSON read/write convenience methods, available with the `serde`
    /// feature.
    pub trait FsExtJson: FileSystem {
        /// Read a file and deserialize it as JSON.
        ///
        /// # Errors
        ///
        /// - [`FsError::NotFound`] if `path` doesn't exist.
        /// - [`FsError::InvalidPath`] if the file isn't valid JSON for `T`.
        fn read_json<T: DeserializeOwned>(&self, path: &VfsPath) -> Result<T, FsError> {
            let data = self.read_to_end(path)?;
            serde_json::from_slice(&data).map_err(|e| FsError::InvalidPath {
                reason: format!("invalid JSON at {path}: {e}"),
            })
        }

        /// Serialize a value and write it as JSON, pretty-printed.
        ///
        /// # Errors
        ///
        /// Same as [`FsExt::write_all`].
        fn write_json<T: Serialize>(&self, path: &VfsPath, value: &T) -> Result<(), FsError> {
            let json = serde_json::to_string_pretty(value).map_err(|e| FsError::InvalidPath {
                reason: format!("failed to serialize JSON for {path}: {e}"),
            })?;
            self.write_all(path, json.as_bytes())
        }
    }

    impl<B: FileSystem + ?Sized> FsExtJson for B {}
}

#[cfg(feature = "serde")]
pub use json::FsExtJson;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ByteStream, ByteWriter, CapabilityFlags, FileStat, FsCapabilities, FsDirOps, FsFileOps,
        FsList, FsStat, FsStreams, RandomReader, Selector,
    };
    use std::sync::Mutex;

    struct MockFs {
        file: Option<Vec<u8>>,
        written: Mutex<Vec<u8>>,
    }

    impl MockFs {
        fn with_file(data: &[u8]) -> Self {
            Self {
                file: Some(data.to_vec()),
                written: Mutex::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self {
                file: None,
                written: Mutex::new(Vec::new()),
            }
        }
    }

    impl FsStat for MockFs {
        fn stat(&self, path: &VfsPath) -> Result<FileStat, FsError> {
            match &self.file {
                Some(data) => Ok(FileStat::file(path.clone(), Some(data.len() as u64), None)),
                None => Ok(FileStat::non_existent(path.clone())),
            }
        }
    }

    impl FsList for MockFs {
        fn list(&self, _: &Selector) -> Result<Vec<FileStat>, FsError> {
            Ok(vec![])
        }
    }

    impl FsDirOps for MockFs {
        fn create_dir(&self, _: &VfsPath, _recursive: bool) -> Result<(), FsError> {
            Ok(())
        }
        fn delete_dir(&self, _: &VfsPath) -> Result<(), FsError> {
            Ok(())
        }
        fn delete_dir_contents(&self, _: &VfsPath) -> Result<(), FsError> {
            Ok(())
        }
    }

    impl FsFileOps for MockFs {
        fn delete_file(&self, _: &VfsPath) -> Result<(), FsError> {
            Ok(())
        }
        fn move_path(&self, _: &VfsPath, _: &VfsPath) -> Result<(), FsError> {
            Ok(())
        }
        fn copy_file(&self, _: &VfsPath, _: &VfsPath) -> Result<(), FsError> {
            Ok(())
        }
    }

    struct Reader(Vec<u8>, usize, bool);

    impl ByteStream for Reader {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, FsError> {
            if self.2 {
                return Err(FsError::StreamClosed);
            }
            let remaining = &self.0[self.1..];
            let n = remaining.len().min(buf.len());
            buf[..n].copy_from_slice(&remaining[..n]);
            self.1 += n;
            Ok(n)
        }
        fn close(&mut self) -> Result<(), FsError> {
            self.2 = true;
            Ok(())
        }
        fn is_closed(&self) -> bool {
            self.2
        }
    }

    struct Writer<'a>(&'a Mutex<Vec<u8>>, bool);

    impl<'a> ByteWriter for Writer<'a> {
        fn write(&mut self, buf: &[u8]) -> Result<(), FsError> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(())
        }
        fn tell(&self) -> Result<u64, FsError> {
            Ok(self.0.lock().unwrap().len() as u64)
        }
        fn flush(&mut self) -> Result<(), FsError> {
            Ok(())
        }
        fn close(&mut self) -> Result<(), FsError> {
            self.1 = true;
            Ok(())
        }
        fn is_closed(&self) -> bool {
            self.1
        }
    }

    impl FsStreams for MockFs {
        fn open_input_stream(&self, path: &VfsPath) -> Result<Box<dyn ByteStream>, FsError> {
            match &self.file {
                Some(data) => Ok(Box::new(Reader(data.clone(), 0, false))),
                None => Err(FsError::NotFound { path: path.clone() }),
            }
        }
        fn open_input_file(&self, _: &VfsPath) -> Result<Box<dyn RandomReader>, FsError> {
            unimplemented!("not exercised in these tests")
        }
        fn open_output_stream(&self, _: &VfsPath) -> Result<Box<dyn ByteWriter>, FsError> {
            Ok(Box::new(Writer(&self.written, false)))
        }
        fn open_append_stream(&self, _: &VfsPath) -> Result<Box<dyn ByteWriter>, FsError> {
            Err(FsError::NotSupported {
                operation: "open_append_stream",
            })
        }
    }

    impl FsCapabilities for MockFs {
        fn capabilities(&self) -> CapabilityFlags {
            CapabilityFlags::default()
        }
    }

    fn p(s: &str) -> VfsPath {
        VfsPath::parse(s).unwrap()
    }

    #[test]
    fn is_file_true_for_files() {
        let fs = MockFs::with_file(b"hi");
        assert!(fs.is_file(&p("test.txt")).unwrap());
    }

    #[test]
    fn is_file_false_for_missing() {
        let fs = MockFs::empty();
        assert!(!fs.is_file(&p("missing")).unwrap());
    }

    #[test]
    fn exists_false_for_missing() {
        let fs = MockFs::empty();
        assert!(!fs.exists(&p("missing")).unwrap());
    }

    #[test]
    fn file_size_returns_size() {
        let fs = MockFs::with_file(b"hello");
        assert_eq!(fs.file_size(&p("test.txt")).unwrap(), 5);
    }

    #[test]
    fn file_size_errors_on_missing() {
        let fs = MockFs::empty();
        let result = fs.file_size(&p("missing"));
        assert!(matches!(result, Err(FsError::NotAFile { .. })));
    }

    #[test]
    fn read_to_end_reads_full_contents() {
        let fs = MockFs::with_file(b"hello world");
        let data = fs.read_to_end(&p("test.txt")).unwrap();
        assert_eq!(data, b"hello world");
    }

    #[test]
    fn write_all_writes_full_contents() {
        let fs = MockFs::empty();
        fs.write_all(&p("test.txt"), b"payload").unwrap();
        assert_eq!(&*fs.written.lock().unwrap(), b"payload");
    }

    #[test]
    fn fs_ext_available_on_dyn_filesystem() {
        let fs: &dyn FileSystem = &MockFs::with_file(b"hi");
        assert!(fs.is_file(&p("test.txt")).unwrap());
    }
}
