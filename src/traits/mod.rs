//! # Filesystem Traits
//!
//! The component traits that make up the contract's single composite
//! trait, [`FileSystem`].
//!
//! ## Component Traits
//!
//! Each concern lives in its own object-safe trait so a backend — or a
//! middleware layer built with [`Layer`](crate::Layer) — can implement
//! or wrap exactly the part it cares about:
//!
//! ```text
//! FsStat + FsList + FsDirOps + FsFileOps + FsStreams + FsCapabilities = FileSystem
//! ```
//!
//! | Composite Trait | Component Traits | Covers |
//! |------------------|------------------|--------|
//! | [`FileSystem`] | [`FsStat`], [`FsList`], [`FsDirOps`], [`FsFileOps`], [`FsStreams`], [`FsCapabilities`] | Every operation in the contract |
//!
//! ## Blanket Implementation
//!
//! [`FileSystem`] has a blanket implementation. Implement the six
//! component traits, and you get `FileSystem` automatically:
//!
//! ```rust
//! use vfs_contract::{
//!     ByteStream, ByteWriter, CapabilityFlags, FileStat, FileSystem, FsCapabilities,
//!     FsDirOps, FsError, FsFileOps, FsList, FsStat, FsStreams, RandomReader, Selector,
//!     VfsPath,
//! };
//!
//! struct MyBackend;
//!
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
//!
//! // MyBackend now implements FileSystem automatically.
//! fn use_fs<B: FileSystem>(_backend: &B) { /* ... */ }
//! use_fs(&MyBackend);
//! ```
//!
//! ## Thread Safety
//!
//! All component traits require `Send + Sync`. Methods take `&self` to
//! enable concurrent access; backends use interior mutability (`RwLock`,
//! `Mutex`) for thread-safe state management (spec §5).
//!
//! ## Object Safety
//!
//! Every component trait, and [`FileSystem`] itself, is object-safe:
//!
//! ```rust
//! use vfs_contract::FileSystem;
//! use vfs_contract::VfsPath;
//!
//! fn process(fs: &dyn FileSystem) {
//!     let _ = fs.stat(&VfsPath::root());
//! }
//! ```

mod fs_capabilities;
mod fs_dir_ops;
mod fs_file_ops;
mod fs_list;
mod fs_stat;
mod fs_streams;

pub use fs_capabilities::FsCapabilities;
pub use fs_dir_ops::FsDirOps;
pub use fs_file_ops::FsFileOps;
pub use fs_list::FsList;
pub use fs_stat::FsStat;
pub use fs_streams::FsStreams;

/// The uniform filesystem interface every backend implements.
///
/// Combines status queries ([`FsStat`], [`FsList`]), directory
/// management ([`FsDirOps`]), file management ([`FsFileOps`]), I/O
/// ([`FsStreams`]), and capability reporting ([`FsCapabilities`]) into
/// the single contract described in the specification.
///
/// # Blanket Implementation
///
/// Automatically implemented for any type implementing all six component
/// traits. You never need to implement `FileSystem` directly — just
/// implement the components.
///
/// # Example
///
/// ```rust
/// use vfs_contract::{FileSystem, FsError, VfsPath};
///
/// fn backup_file<FS: FileSystem>(fs: &FS, src: &VfsPath, dst: &VfsPath) -> Result<(), FsError> {
///     let mut input = fs.open_input_stream(src)?;
///     let mut output = fs.open_output_stream(dst)?;
///     let mut buf = [0u8; 8192];
///     loop {
///         let n = input.read(&mut buf)?;
///         if n == 0 {
///             break;
///         }
///         output.write(&buf[..n])?;
///     }
///     input.close()?;
///     output.close()?;
///     Ok(())
/// }
/// ```
///
/// # Available Methods
///
/// From [`FsStat`]: `stat`, `stat_many`.
///
/// From [`FsList`]: `list`.
///
/// From [`FsDirOps`]: `create_dir`, `delete_dir`, `delete_dir_contents`.
///
/// From [`FsFileOps`]: `delete_file`, `delete_files`, `move_path`, `copy_file`.
///
/// From [`FsStreams`]: `open_input_stream`, `open_input_file`,
/// `open_output_stream`, `open_append_stream`.
///
/// From [`FsCapabilities`]: `capabilities`.
pub trait FileSystem: FsStat + FsList + FsDirOps + FsFileOps + FsStreams + FsCapabilities {}

impl<T> FileSystem for T where
    T: FsStat + FsList + FsDirOps + FsFileOps + FsStreams + FsCapabilities
{
}
