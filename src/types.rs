//! # Core Types
//!
//! Fundamental value types shared by every [`FileSystem`](crate::FileSystem)
//! implementation.
//!
//! ## Quick Reference
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`FileType`] | What, if anything, lives at a path |
//! | [`FileStat`] | Path + type + size + mtime, as returned by `stat`/`list` |
//! | [`Selector`] | Directory-listing parameters: base dir, recursion, depth |
//! | [`CapabilityFlags`] | Which optional behaviors a backend supports |
//!
//! ## Serde Support
//!
//! All types support serialization when the `serde` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! vfs-contract = { version = "0.1", features = ["serde"] }
//! ```

use std::time::SystemTime;

use crate::VfsPath;

/// What, if anything, exists at a path.
///
/// Backends with an implicit directory model (object stores without a
/// real `mkdir`) may legitimately return [`Unknown`](FileType::Unknown)
/// for a prefix whose type cannot be determined without a full listing.
///
/// # Example
///
/// ```rust
/// use vfs_contract::FileType;
///
/// let ft = FileType::File;
/// assert_eq!(ft, FileType::File);
/// assert_ne!(ft, FileType::Directory);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Nothing exists at this path.
    NonExistent,
    /// Regular file containing data.
    File,
    /// Directory containing other entries.
    Directory,
    /// Something exists, but its type could not be determined.
    Unknown,
}

/// Information about a path: whether it exists, its type, size, and
/// modification time.
///
/// Returned by [`FsStat::stat`](crate::FsStat::stat) and
/// [`FsList::list`](crate::FsList::list). `size` and `mtime` are `None`
/// exactly when the backend cannot report them — for a non-existent path,
/// for a directory that doesn't track an mtime, or for a backend that
/// doesn't track size for some entry kind. There is no magic sentinel
/// value; `Option` makes "unknown" explicit at the type level.
///
/// # Invariant
///
/// [`FileType::NonExistent`] always pairs with `size: None` and
/// `mtime: None`. Use the constructors below rather than building a
/// `FileStat` by hand to keep this invariant obviously true at every call
/// site.
///
/// # Example
///
/// ```rust
/// use vfs_contract::{FileStat, VfsPath};
/// use std::time::SystemTime;
///
/// let path = VfsPath::parse("a/readme.md").unwrap();
/// let stat = FileStat::file(path, Some(1024), Some(SystemTime::now()));
///
/// assert!(stat.is_file());
/// assert_eq!(stat.size, Some(1024));
/// assert_eq!(stat.base_name(), "readme.md");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileStat {
    /// The path this stat describes.
    pub path: VfsPath,
    /// What kind of entry, if any, exists at `path`.
    pub file_type: FileType,
    /// Size in bytes. `None` when unknown or not applicable (directories,
    /// non-existent paths).
    pub size: Option<u64>,
    /// Last modification time. `None` when unknown or not applicable.
    #[cfg_attr(feature = "serde", serde(with = "option_system_time_serde"))]
    pub mtime: Option<SystemTime>,
}

impl FileStat {
    /// Build a [`FileStat`] for a path that does not exist.
    pub fn non_existent(path: VfsPath) -> Self {
        Self {
            path,
            file_type: FileType::NonExistent,
            size: None,
            mtime: None,
        }
    }

    /// Build a [`FileStat`] for a regular file.
    pub fn file(path: VfsPath, size: Option<u64>, mtime: Option<SystemTime>) -> Self {
        Self {
            path,
            file_type: FileType::File,
            size,
            mtime,
        }
    }

    /// Build a [`FileStat`] for a directory. Directories never report a
    /// size; see [`CapabilityFlags::have_directory_mtimes`] for whether
    /// `mtime` is meaningful on this backend.
    pub fn directory(path: VfsPath, mtime: Option<SystemTime>) -> Self {
        Self {
            path,
            file_type: FileType::Directory,
            size: None,
            mtime,
        }
    }

    /// Build a [`FileStat`] whose type could not be determined.
    pub fn unknown(path: VfsPath) -> Self {
        Self {
            path,
            file_type: FileType::Unknown,
            size: None,
            mtime: None,
        }
    }

    /// The last path segment. See [`VfsPath::base_name`].
    #[inline]
    pub fn base_name(&self) -> &str {
        self.path.base_name()
    }

    /// Returns `true` if [`file_type`](Self::file_type) is
    /// [`FileType::File`].
    #[inline]
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    /// Returns `true` if [`file_type`](Self::file_type) is
    /// [`FileType::Directory`].
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    /// Returns `true` if [`file_type`](Self::file_type) is
    /// [`FileType::NonExistent`].
    #[inline]
    pub fn is_non_existent(&self) -> bool {
        self.file_type == FileType::NonExistent
    }

    /// Returns `true` if [`file_type`](Self::file_type) is
    /// [`FileType::Unknown`].
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.file_type == FileType::Unknown
    }
}

/// Parameters for a recursive or non-recursive directory listing.
///
/// Passed to [`FsList::list`](crate::FsList::list). Mirrors a directory
/// walk's two knobs: whether to descend at all, and how far.
///
/// # Example
///
/// ```rust
/// use vfs_contract::{Selector, VfsPath};
///
/// let sel = Selector::new(VfsPath::root())
///     .recursive(true)
///     .max_recursion(2);
///
/// assert!(sel.recursive);
/// assert_eq!(sel.max_recursion, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selector {
    /// The directory to list.
    pub base_dir: VfsPath,
    /// Whether to descend into subdirectories.
    pub recursive: bool,
    /// Maximum recursion depth below `base_dir`. Ignored when `recursive`
    /// is `false`. `i32::MAX` means unbounded.
    pub max_recursion: i32,
    /// If `true`, listing a `base_dir` that does not exist yields an
    /// empty result instead of [`FsError::NotFound`](crate::FsError::NotFound).
    pub allow_non_existent: bool,
}

impl Selector {
    /// A non-recursive selector over `base_dir` that errors if `base_dir`
    /// does not exist.
    pub fn new(base_dir: VfsPath) -> Self {
        Self {
            base_dir,
            recursive: false,
            max_recursion: i32::MAX,
            allow_non_existent: false,
        }
    }

    /// Set whether the listing descends into subdirectories.
    #[inline]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the maximum recursion depth below `base_dir`.
    #[inline]
    pub fn max_recursion(mut self, max_recursion: i32) -> Self {
        self.max_recursion = max_recursion;
        self
    }

    /// Set whether a missing `base_dir` yields an empty result rather
    /// than an error.
    #[inline]
    pub fn allow_non_existent(mut self, allow_non_existent: bool) -> Self {
        self.allow_non_existent = allow_non_existent;
        self
    }
}

/// Which optional behaviors a backend supports.
///
/// A backend reports these through
/// [`FsCapabilities::capabilities`](crate::FsCapabilities::capabilities)
/// so that generic callers — including the conformance suite — can adapt
/// rather than assume. Every flag defaults to the most restrictive value;
/// a backend opts in to leniency explicitly.
///
/// # Example
///
/// ```rust
/// use vfs_contract::CapabilityFlags;
///
/// let caps = CapabilityFlags::default().with_allow_append_to_file(true);
/// assert!(caps.allow_append_to_file);
/// assert!(!caps.allow_move_dir);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityFlags {
    /// Directories exist implicitly as common prefixes of the files
    /// within them, rather than as entries a caller must create.
    pub have_implicit_directories: bool,
    /// `FsFileOps::open_output_stream` may target a path that is
    /// currently a directory, replacing it with a file.
    pub allow_write_file_over_dir: bool,
    /// `FsFileOps::move_path` may move a directory, not only a file.
    pub allow_move_dir: bool,
    /// `FsStreams::open_append_stream` is supported.
    pub allow_append_to_file: bool,
    /// Directories carry a meaningful modification time.
    pub have_directory_mtimes: bool,
}

impl CapabilityFlags {
    /// Set [`have_implicit_directories`](Self::have_implicit_directories).
    #[inline]
    pub fn with_implicit_directories(mut self, value: bool) -> Self {
        self.have_implicit_directories = value;
        self
    }

    /// Set [`allow_write_file_over_dir`](Self::allow_write_file_over_dir).
    #[inline]
    pub fn with_allow_write_file_over_dir(mut self, value: bool) -> Self {
        self.allow_write_file_over_dir = value;
        self
    }

    /// Set [`allow_move_dir`](Self::allow_move_dir).
    #[inline]
    pub fn with_allow_move_dir(mut self, value: bool) -> Self {
        self.allow_move_dir = value;
        self
    }

    /// Set [`allow_append_to_file`](Self::allow_append_to_file).
    #[inline]
    pub fn with_allow_append_to_file(mut self, value: bool) -> Self {
        self.allow_append_to_file = value;
        self
    }

    /// Set [`have_directory_mtimes`](Self::have_directory_mtimes).
    #[inline]
    pub fn with_directory_mtimes(mut self, value: bool) -> Self {
        self.have_directory_mtimes = value;
        self
    }
}

/// Serde support for `Option<SystemTime>` (when the `serde` feature is
/// enabled).
#[cfg(feature = "serde")]
mod option_system_time_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    pub fn serialize<S>(time: &Option<SystemTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let raw = time.map(|t| {
            let duration = t.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
            (duration.as_secs(), duration.subsec_nanos())
        });
        raw.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SystemTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<(u64, u32)> = Deserialize::deserialize(deserializer)?;
        Ok(raw.map(|(secs, nanos)| UNIX_EPOCH + Duration::new(secs, nanos)))
    }
}
