//! # Conformance Test Suite
//!
//! A generic suite that exercises any [`FileSystem`] implementation
//! against the contract's invariants, independent of backend.
//!
//! ## Usage
//!
//! A backend crate calls [`run_all`] from its own test suite, passing a
//! factory that builds a fresh, empty instance of the backend:
//!
//! ```rust,no_run
//! use vfs_contract::conformance;
//!
//! # use vfs_contract::{
//! #     ByteStream, ByteWriter, CapabilityFlags, FileStat, FileSystem, FsCapabilities,
//! #     FsDirOps, FsError, FsFileOps, FsList, FsStat, FsStreams, RandomReader, Selector,
//! #     VfsPath,
//! # };
//! # struct MyBackend;
//! # impl FsStat for MyBackend {
//! #     fn stat(&self, path: &VfsPath) -> Result<FileStat, FsError> { Ok(FileStat::non_existent(path.clone())) }
//! # }
//! # impl FsList for MyBackend {
//! #     fn list(&self, _: &Selector) -> Result<Vec<FileStat>, FsError> { Ok(vec![]) }
//! # }
//! # impl FsDirOps for MyBackend {
//! #     fn create_dir(&self, _: &VfsPath, _recursive: bool) -> Result<(), FsError> { Ok(()) }
//! #     fn delete_dir(&self, _: &VfsPath) -> Result<(), FsError> { Ok(()) }
//! #     fn delete_dir_contents(&self, _: &VfsPath) -> Result<(), FsError> { Ok(()) }
//! # }
//! # impl FsFileOps for MyBackend {
//! #     fn delete_file(&self, _: &VfsPath) -> Result<(), FsError> { Ok(()) }
//! #     fn move_path(&self, _: &VfsPath, _: &VfsPath) -> Result<(), FsError> { Ok(()) }
//! #     fn copy_file(&self, _: &VfsPath, _: &VfsPath) -> Result<(), FsError> { Ok(()) }
//! # }
//! # impl FsStreams for MyBackend {
//! #     fn open_input_stream(&self, _: &VfsPath) -> Result<Box<dyn ByteStream>, FsError> { unimplemented!() }
//! #     fn open_input_file(&self, _: &VfsPath) -> Result<Box<dyn RandomReader>, FsError> { unimplemented!() }
//! #     fn open_output_stream(&self, _: &VfsPath) -> Result<Box<dyn ByteWriter>, FsError> { unimplemented!() }
//! #     fn open_append_stream(&self, _: &VfsPath) -> Result<Box<dyn ByteWriter>, FsError> { unimplemented!() }
//! # }
//! # impl FsCapabilities for MyBackend {
//! #     fn capabilities(&self) -> CapabilityFlags { CapabilityFlags::default() }
//! # }
//! #[test]
//! fn honors_the_contract() {
//!     conformance::run_all(|| MyBackend);
//! }
//! ```
//!
//! Each scenario constructs its own fresh filesystem via `factory`, so
//! scenarios never observe each other's state. A scenario that depends on
//! a capability the backend doesn't report (`allow_move_dir`,
//! `allow_append_to_file`, `have_directory_mtimes`) checks
//! [`FsCapabilities::capabilities`] and returns early rather than failing,
//! since the contract leaves that behavior backend-defined.
//!
//! Scenarios use `assert!`/`unwrap` directly rather than returning a
//! `Result`, so a violation panics with the offending assertion and a
//! useful message, the same way a plain `#[test]` function would.

mod harness;

pub mod dir_ops;
pub mod file_ops;
pub mod selector;
pub mod stat;
pub mod streams;

use std::time::Duration;

use crate::FileSystem;

/// Slack allowed when a scenario compares a backend-reported timestamp
/// against the wall clock, to tolerate coarse-grained clocks or a small
/// amount of clock skew between the test process and the backend.
pub const TIME_SLACK: Duration = Duration::from_secs(10);

/// Run every conformance scenario against a fresh instance built by
/// `factory`, once per scenario.
///
/// Panics on the first scenario whose assertions fail, reporting which
/// contract invariant was violated.
pub fn run_all<FS: FileSystem, F: Fn() -> FS>(factory: F) {
    dir_ops::test_empty(&factory());
    dir_ops::test_create_dir(&factory());
    dir_ops::test_create_dir_non_recursive(&factory());
    dir_ops::test_delete_dir(&factory());
    dir_ops::test_delete_dir_contents(&factory());

    file_ops::test_delete_file(&factory());
    file_ops::test_delete_files(&factory());
    file_ops::test_move_file(&factory());
    file_ops::test_move_dir(&factory());
    file_ops::test_copy_file(&factory());

    stat::test_stat_single(&factory());
    stat::test_stat_many(&factory());
    stat::test_directory_mtime_on_child_creation(&factory());

    selector::test_selector(&factory());
    selector::test_selector_with_recursion(&factory());

    streams::test_open_output_stream(&factory());
    streams::test_open_append_stream(&factory());
    streams::test_open_input_stream(&factory());
    streams::test_open_input_file(&factory());
}
