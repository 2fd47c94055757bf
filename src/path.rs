//! # Virtual Paths
//!
//! Normalized, slash-delimited, relative paths with no I/O of their own.
//!
//! ## Overview
//!
//! [`VfsPath`] is the value type every [`FileSystem`](crate::FileSystem)
//! operation takes and returns. Construction is fallible and validates the
//! normalization rules up front, so a `VfsPath` in hand is already proof
//! those rules hold — no operation needs to re-validate a path it receives.
//!
//! ## Normalization Rules
//!
//! - Segments are separated by `/`.
//! - The empty string denotes the root.
//! - No empty interior segments (`"a//b"` is rejected).
//! - No `.` or `..` segments.
//! - No trailing `/`, except the root itself (which has no segments at all).
//! - No drive letters or other platform-specific prefixes.
//!
//! ## Example
//!
//! ```rust
//! use vfs_contract::VfsPath;
//!
//! let p = VfsPath::parse("AB/CD/ghi").unwrap();
//! assert_eq!(p.base_name(), "ghi");
//! assert_eq!(p.parent().unwrap().to_string(), "AB/CD");
//! assert!(VfsPath::parse("AB//CD").is_err());
//! assert!(VfsPath::parse("../AB").is_err());
//! ```

use std::fmt;

use crate::FsError;

/// A normalized, slash-delimited, relative path.
///
/// See the [module docs](self) for the normalization rules. A `VfsPath`
/// is always valid by construction; there is no way to build one that
/// violates the invariants in spec §3 of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct VfsPath(String);

impl VfsPath {
    /// The root path — the empty string, denoting the backend-defined root.
    ///
    /// ```rust
    /// use vfs_contract::VfsPath;
    ///
    /// assert!(VfsPath::root().is_root());
    /// assert_eq!(VfsPath::root().to_string(), "");
    /// ```
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Parse and validate a path string.
    ///
    /// # Errors
    ///
    /// [`FsError::InvalidPath`] if the string contains an empty interior
    /// segment, a `.`/`..` segment, or a trailing slash on a non-root path.
    pub fn parse(s: &str) -> Result<Self, FsError> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        if let Some(stripped) = s.strip_prefix('/') {
            return Err(FsError::InvalidPath {
                reason: format!("absolute paths are not allowed: {stripped}"),
            });
        }
        if s.ends_with('/') {
            return Err(FsError::InvalidPath {
                reason: format!("trailing slash not allowed: {s}"),
            });
        }
        for segment in s.split('/') {
            validate_segment(segment)?;
        }
        Ok(Self(s.to_string()))
    }

    /// Returns `true` if this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The last path segment, or the empty string for the root.
    ///
    /// This is always derived from the stored path rather than stored
    /// separately, so it can never drift out of sync with it.
    pub fn base_name(&self) -> &str {
        if self.is_root() {
            return "";
        }
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// The parent path, or `None` if this is the root.
    ///
    /// Invariant: `join(parent(p), basename(p)) == p` for every non-root `p`.
    ///
    /// ```rust
    /// use vfs_contract::VfsPath;
    ///
    /// let p = VfsPath::parse("AB/CD/ghi").unwrap();
    /// let parent = p.parent().unwrap();
    /// assert_eq!(parent.join(p.base_name()).unwrap(), p);
    /// ```
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => Some(Self::root()),
        }
    }

    /// Iterate over the path's segments.
    ///
    /// Yields nothing for the root path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let slice: &str = if self.is_root() { "" } else { &self.0 };
        slice.split('/').filter(|s| !s.is_empty())
    }

    /// Join a single child segment onto this path.
    ///
    /// # Errors
    ///
    /// [`FsError::InvalidPath`] if `child` is not a valid single segment
    /// (contains `/`, is empty, or is `.`/`..`).
    pub fn join(&self, child: &str) -> Result<Self, FsError> {
        validate_segment(child)?;
        if self.is_root() {
            Self::parse(child)
        } else {
            Self::parse(&format!("{}/{}", self.0, child))
        }
    }

    /// Returns `true` if `self` is `other` or a descendant of `other`.
    ///
    /// Used to reject moving/copying a directory into itself or a
    /// descendant (spec §4.3).
    pub fn is_self_or_descendant_of(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }
        if other.is_root() {
            return true;
        }
        self.0
            .strip_prefix(other.0.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Borrow the underlying normalized string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_segment(segment: &str) -> Result<(), FsError> {
    if segment.is_empty() {
        return Err(FsError::InvalidPath {
            reason: "empty path segment".to_string(),
        });
    }
    if segment == "." || segment == ".." {
        return Err(FsError::InvalidPath {
            reason: format!("'{segment}' segment is not allowed"),
        });
    }
    if segment.contains('/') {
        return Err(FsError::InvalidPath {
            reason: format!("segment must not contain '/': {segment}"),
        });
    }
    Ok(())
}

impl fmt::Display for VfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for VfsPath {
    type Error = FsError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VfsPath {
    type Error = FsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<VfsPath> for String {
    fn from(p: VfsPath) -> Self {
        p.0
    }
}

impl AsRef<str> for VfsPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
