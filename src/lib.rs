//! # vfs-contract
//!
//! Core traits and types for a **cross-backend virtual filesystem
//! contract**: the uniform operation set every backend (local disk,
//! object storage, a network filesystem, an in-memory fixture) implements,
//! plus a generic conformance test suite that exercises any of them
//! identically.
//!
//! This crate provides **only trait definitions, value types, and
//! conformance tests** — no concrete backend ships here. A backend crate
//! implements the six component traits below and gets [`FileSystem`] for
//! free via blanket implementation, then runs [`conformance::run_all`]
//! against itself to prove it honors the contract.
//!
//! ---
//!
//! ## Quick Start
//!
//! Most callers only need [`FileSystem`] plus [`VfsPath`] for addressing:
//!
//! ```rust
//! use vfs_contract::{FileSystem, FsError, VfsPath};
//!
//! fn work_with_files<FS: FileSystem>(fs: &FS) -> Result<(), FsError> {
//!     let input = VfsPath::parse("input.txt")?;
//!     let output = VfsPath::parse("output.txt")?;
//!
//!     let mut reader = fs.open_input_stream(&input)?;
//!     let mut writer = fs.open_output_stream(&output)?;
//!     let mut buf = [0u8; 8192];
//!     loop {
//!         let n = reader.read(&mut buf)?;
//!         if n == 0 {
//!             break;
//!         }
//!         writer.write(&buf[..n])?;
//!     }
//!     reader.close()?;
//!     writer.close()?;
//!
//!     fs.create_dir(&VfsPath::parse("archive/2026")?, true)?;
//!     Ok(())
//! }
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`VfsPath`] | Normalized, slash-delimited, relative path |
//! | [`FileType`] | What, if anything, exists at a path |
//! | [`FileStat`] | Path + type + size + mtime |
//! | [`Selector`] | Directory-listing parameters |
//! | [`CapabilityFlags`] | Which optional behaviors a backend supports |
//! | [`FsError`] | Comprehensive error type with context |
//! | [`ByteStream`], [`RandomReader`], [`ByteWriter`] | Open stream handles |
//!
//! ---
//!
//! ## Trait Composition
//!
//! Six object-safe component traits, each covering one concern, compose
//! into [`FileSystem`] via a blanket implementation:
//!
//! ```text
//! FsStat + FsList + FsDirOps + FsFileOps + FsStreams + FsCapabilities = FileSystem
//! ```
//!
//! Implement the six component traits on a backend type, and it
//! implements `FileSystem` automatically — there is nothing further to
//! wire up. See the [`traits`] module docs for the full picture.
//!
//! ---
//!
//! ## Error Handling
//!
//! All operations return `Result<T, FsError>`. Every variant classifies
//! into one of two kinds, `IOError` or `Invalid`, via
//! [`FsError::is_io_error`] / [`FsError::is_invalid`]:
//!
//! ```rust
//! use vfs_contract::{FsError, VfsPath};
//!
//! let err = FsError::NotFound { path: VfsPath::parse("missing.txt").unwrap() };
//! assert_eq!(err.to_string(), "not found: missing.txt");
//! assert!(err.is_io_error());
//! ```
//!
//! ---
//!
//! ## Thread Safety
//!
//! All component traits require `Send + Sync`. Methods take `&self` (not
//! `&mut self`), enabling safe concurrent access; backends use interior
//! mutability internally. You can safely share a backend across threads
//! with `Arc<B>` and issue concurrent operations without locking at the
//! call site (spec §5). Streams ([`ByteStream`], [`RandomReader`],
//! [`ByteWriter`]) are the exception: they are `Send` but not `Sync`,
//! since each has exactly one owner at a time.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`VfsPath`], [`FileStat`], [`Selector`], [`CapabilityFlags`], and JSON convenience methods via [`FsExtJson`] |
//!
//! ---
//!
//! ## Crate Organization
//!
//! This crate (`vfs-contract`) contains traits, types, and the
//! [`conformance`] test suite — no concrete backend. A backend crate
//! depends on this one, implements the component traits, and calls
//! [`conformance::run_all`] from its own test suite against a constructor
//! for the backend under test.

// Private modules
mod error;
mod ext;
mod layer;
mod path;
mod traits;
mod types;

pub mod conformance;
pub mod streams;

// Public re-exports - error type
pub use error::FsError;

// Public re-exports - path
pub use path::VfsPath;

// Public re-exports - core types
pub use types::{CapabilityFlags, FileStat, FileType, Selector};

// Public re-exports - streams
pub use streams::{ByteStream, ByteWriter, RandomReader};

// Public re-exports - component traits and the FileSystem composite
pub use traits::{FileSystem, FsCapabilities, FsDirOps, FsFileOps, FsList, FsStat, FsStreams};

// Public re-exports - infrastructure
pub use ext::FsExt;
pub use layer::{Layer, LayerExt};

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::FsExtJson;
