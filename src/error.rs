//! # Error Types
//!
//! Filesystem error handling for the virtual filesystem contract.
//!
//! ## Overview
//!
//! All operations return `Result<T, FsError>`. [`FsError`] provides
//! detailed, contextual error variants that include:
//!
//! - **Path information** — which path caused the error
//! - **Operation context** — what operation was attempted
//! - **Classification** — every variant falls into one of two kinds,
//!   [`IOError`](FsError::is_io_error) or [`Invalid`](FsError::is_invalid)
//!
//! ## Error Categories
//!
//! | Category | Variants | Description |
//! |----------|----------|-------------|
//! | Existence/Type | `NotFound`, `NotAFile`, `NotADirectory`, `AlreadyExists`, `DirectoryNotEmpty` | Path existence and type errors |
//! | Permission | `PermissionDenied` | Access control errors |
//! | Structural | `PreconditionViolation` | Operation-specific precondition failures |
//! | Backend | `Backend` | Underlying I/O transport failures |
//! | Usage | `InvalidPath`, `StreamClosed`, `NotSupported` | Caller-side misuse |
//!
//! ## Quick Example
//!
//! ```rust
//! use vfs_contract::{FsError, VfsPath};
//!
//! let err = FsError::NotFound { path: VfsPath::parse("missing.txt").unwrap() };
//! assert!(err.to_string().contains("missing.txt"));
//! assert!(err.is_io_error());
//! assert!(!err.is_invalid());
//! ```
//!
//! ## Conversion from `std::io::Error`
//!
//! [`FsError`] implements `From<std::io::Error>` for easy interoperability
//! with backends built on top of `std::fs` or other std I/O:
//!
//! ```rust
//! use vfs_contract::FsError;
//! use std::io::{Error, ErrorKind};
//!
//! let io_err = Error::new(ErrorKind::NotFound, "file not found");
//! let fs_err: FsError = io_err.into();
//! assert!(matches!(fs_err, FsError::NotFound { .. }));
//! ```

use crate::VfsPath;

/// Comprehensive filesystem error type.
///
/// Every contract operation returns `Result<T, FsError>`. Each variant
/// carries the path/operation context needed to act on the failure without
/// re-deriving it from a bare `std::io::Error`.
///
/// # Non-Exhaustive
///
/// This enum is marked `#[non_exhaustive]`: new variants may be added in
/// future versions without a breaking change. Match on
/// [`is_io_error`](FsError::is_io_error) / [`is_invalid`](FsError::is_invalid)
/// when only the contract-level kind matters, and always include a wildcard
/// arm when matching concrete variants:
///
/// ```rust
/// use vfs_contract::FsError;
///
/// fn handle_error(err: FsError) {
///     match err {
///         FsError::NotFound { path } => println!("not found: {path}"),
///         FsError::PermissionDenied { path, operation } => {
///             println!("permission denied for {operation} on {path}")
///         }
///         other => println!("other error: {other}"),
///     }
/// }
/// ```
///
/// # Error Source Chain
///
/// The [`Backend`](FsError::Backend) variant wraps `std::io::Error` with the
/// `#[source]` attribute, enabling error chain traversal via
/// `std::error::Error::source()`.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    // ---- IOError kind (spec §7) ----
    /// Path does not exist where existence was required.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: VfsPath,
    },

    /// Expected a file but found something else, or nothing.
    #[error("not a file: {path}")]
    NotAFile {
        /// The path that is not a file.
        path: VfsPath,
    },

    /// Expected a directory but found something else, or nothing.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: VfsPath,
    },

    /// Destination already exists where that is disallowed.
    #[error("{operation}: already exists: {path}")]
    AlreadyExists {
        /// The path that already exists.
        path: VfsPath,
        /// The operation that failed.
        operation: &'static str,
    },

    /// Directory is not empty when an empty directory was required.
    #[error("directory not empty: {path}")]
    DirectoryNotEmpty {
        /// The path to the non-empty directory.
        path: VfsPath,
    },

    /// Permission denied for the attempted operation.
    #[error("{operation}: permission denied: {path}")]
    PermissionDenied {
        /// The path where permission was denied.
        path: VfsPath,
        /// The operation that was denied.
        operation: &'static str,
    },

    /// A structural precondition was violated, e.g. moving a directory
    /// into itself or one of its own descendants (spec §4.3).
    #[error("precondition violation on {path}: {reason}")]
    PreconditionViolation {
        /// The path that violated a precondition.
        path: VfsPath,
        /// A description of the violated precondition.
        reason: String,
    },

    /// Backend-specific transport or I/O failure.
    #[error("{operation} failed for {path}: {source}")]
    Backend {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: VfsPath,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    // ---- Invalid kind (spec §7) ----
    /// Path string failed normalization (spec §3).
    #[error("invalid path: {reason}")]
    InvalidPath {
        /// Description of why the path is invalid.
        reason: String,
    },

    /// A read, write, or seek was attempted on a stream after `close()`.
    #[error("stream is closed")]
    StreamClosed,

    /// The operation is not supported by this backend, e.g. an append
    /// where [`CapabilityFlags::allow_append_to_file`](crate::CapabilityFlags::allow_append_to_file) is `false`.
    #[error("operation not supported: {operation}")]
    NotSupported {
        /// The unsupported operation.
        operation: &'static str,
    },
}

impl FsError {
    /// Returns `true` if this is an `IOError` per spec §7: an operational
    /// failure reported by the backend rather than caller misuse.
    pub fn is_io_error(&self) -> bool {
        !self.is_invalid()
    }

    /// Returns `true` if this is an `Invalid` per spec §7: a use-after-close,
    /// a malformed path, or an operation the backend never supports.
    pub fn is_invalid(&self) -> bool {
        matches!(
            self,
            FsError::InvalidPath { .. } | FsError::StreamClosed | FsError::NotSupported { .. }
        )
    }
}

impl From<std::io::Error> for FsError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound {
                path: VfsPath::root(),
            },
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied {
                path: VfsPath::root(),
                operation: "io",
            },
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists {
                path: VfsPath::root(),
                operation: "io",
            },
            _ => FsError::Backend {
                operation: "io",
                path: VfsPath::root(),
                source: error,
            },
        }
    }
}
