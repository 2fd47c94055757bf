//! End-to-end proof that the conformance suite and the trait contract fit
//! together, using a minimal in-memory backend as the filesystem under
//! test.
//!
//! This backend is a fixture for these tests only; it is not part of the
//! crate's public API and no attempt is made to make it fast or complete
//! beyond what [`vfs_contract::conformance::run_all`] exercises.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use vfs_contract::{
    ByteStream, ByteWriter, CapabilityFlags, FileStat, FileSystem, FsCapabilities, FsDirOps,
    FsError, FsFileOps, FsList, FsStat, FsStreams, RandomReader, Selector, VfsPath,
};

struct FileEntry {
    data: Vec<u8>,
    mtime: SystemTime,
}

#[derive(Default)]
struct Shared {
    files: RwLock<HashMap<VfsPath, FileEntry>>,
    dirs: RwLock<HashSet<VfsPath>>,
    dir_mtimes: RwLock<HashMap<VfsPath, SystemTime>>,
}

#[derive(Clone, Default)]
struct MemoryFileSystem(Arc<Shared>);

impl MemoryFileSystem {
    fn new() -> Self {
        Self::default()
    }

    fn is_dir(&self, path: &VfsPath) -> bool {
        path.is_root() || self.0.dirs.read().unwrap().contains(path)
    }

    fn is_file(&self, path: &VfsPath) -> bool {
        self.0.files.read().unwrap().contains_key(path)
    }

    fn has_children(&self, path: &VfsPath) -> bool {
        self.0
            .dirs
            .read()
            .unwrap()
            .iter()
            .any(|p| p != path && p.is_self_or_descendant_of(path))
            || self
                .0
                .files
                .read()
                .unwrap()
                .keys()
                .any(|p| p.is_self_or_descendant_of(path))
    }

    fn ancestor_chain(path: &VfsPath) -> Vec<VfsPath> {
        let mut chain = Vec::new();
        let mut cur = Some(path.clone());
        while let Some(p) = cur {
            if p.is_root() {
                break;
            }
            cur = p.parent();
            chain.push(p);
        }
        chain.reverse();
        chain
    }

    fn rebase(old: &VfsPath, src: &VfsPath, dst: &VfsPath) -> VfsPath {
        if old == src {
            return dst.clone();
        }
        if src.is_root() {
            let mut result = dst.clone();
            for seg in old.segments() {
                result = result.join(seg).unwrap();
            }
            return result;
        }
        let rest = &old.as_str()[src.as_str().len() + 1..];
        let mut result = dst.clone();
        for seg in rest.split('/') {
            result = result.join(seg).unwrap();
        }
        result
    }

    fn remove_empty_dir_entry(&self, path: &VfsPath) {
        self.0.dirs.write().unwrap().remove(path);
        self.0.dir_mtimes.write().unwrap().remove(path);
    }

    /// Bump `path`'s mtime if it's a tracked directory (spec invariant 8).
    fn touch_dir_mtime(&self, path: &VfsPath) {
        if path.is_root() || self.0.dirs.read().unwrap().contains(path) {
            self.0
                .dir_mtimes
                .write()
                .unwrap()
                .insert(path.clone(), SystemTime::now());
        }
    }

    fn rename_subtree(&self, src: &VfsPath, dst: &VfsPath) {
        let mut dirs = self.0.dirs.write().unwrap();
        let mut mtimes = self.0.dir_mtimes.write().unwrap();
        let mut files = self.0.files.write().unwrap();

        let moved_dirs: Vec<VfsPath> = dirs
            .iter()
            .filter(|p| p.is_self_or_descendant_of(src))
            .cloned()
            .collect();
        for old in moved_dirs {
            dirs.remove(&old);
            let mtime = mtimes.remove(&old);
            let new_path = Self::rebase(&old, src, dst);
            dirs.insert(new_path.clone());
            if let Some(mtime) = mtime {
                mtimes.insert(new_path, mtime);
            }
        }

        let moved_files: Vec<VfsPath> = files
            .keys()
            .filter(|p| p.is_self_or_descendant_of(src))
            .cloned()
            .collect();
        for old in moved_files {
            let entry = files.remove(&old).unwrap();
            files.insert(Self::rebase(&old, src, dst), entry);
        }
    }
}

impl FsStat for MemoryFileSystem {
    fn stat(&self, path: &VfsPath) -> Result<FileStat, FsError> {
        if path.is_root() {
            let mtime = self.0.dir_mtimes.read().unwrap().get(path).copied();
            return Ok(FileStat::directory(path.clone(), mtime));
        }
        if let Some(entry) = self.0.files.read().unwrap().get(path) {
            return Ok(FileStat::file(
                path.clone(),
                Some(entry.data.len() as u64),
                Some(entry.mtime),
            ));
        }
        if self.0.dirs.read().unwrap().contains(path) {
            let mtime = self.0.dir_mtimes.read().unwrap().get(path).copied();
            return Ok(FileStat::directory(path.clone(), mtime));
        }
        Ok(FileStat::non_existent(path.clone()))
    }
}

impl FsList for MemoryFileSystem {
    fn list(&self, selector: &Selector) -> Result<Vec<FileStat>, FsError> {
        let base = &selector.base_dir;
        if !self.is_dir(base) {
            if self.is_file(base) {
                return Err(FsError::NotADirectory { path: base.clone() });
            }
            if selector.allow_non_existent {
                return Ok(Vec::new());
            }
            return Err(FsError::NotFound { path: base.clone() });
        }

        let base_depth = base.segments().count();
        let within_depth = |p: &VfsPath| -> bool {
            if p == base || !p.is_self_or_descendant_of(base) {
                return false;
            }
            let depth = p.segments().count() - base_depth;
            if selector.recursive {
                depth <= selector.max_recursion.max(0) as usize + 1
            } else {
                depth == 1
            }
        };

        let matching: Vec<VfsPath> = {
            let dirs = self.0.dirs.read().unwrap();
            let files = self.0.files.read().unwrap();
            dirs.iter()
                .chain(files.keys())
                .filter(|p| within_depth(p))
                .cloned()
                .collect()
        };
        matching.iter().map(|p| self.stat(p)).collect()
    }
}

impl FsDirOps for MemoryFileSystem {
    fn create_dir(&self, path: &VfsPath, recursive: bool) -> Result<(), FsError> {
        if path.is_root() {
            return Ok(());
        }
        if self.is_file(path) {
            return Err(FsError::AlreadyExists {
                path: path.clone(),
                operation: "create_dir",
            });
        }

        if !recursive {
            let parent = path.parent().unwrap();
            if self.is_file(&parent) {
                return Err(FsError::NotADirectory { path: parent });
            }
            if !self.is_dir(&parent) {
                return Err(FsError::NotFound { path: parent });
            }
            let now = SystemTime::now();
            if self.0.dirs.write().unwrap().insert(path.clone()) {
                self.0.dir_mtimes.write().unwrap().insert(path.clone(), now);
            }
            return Ok(());
        }

        let chain = Self::ancestor_chain(path);
        for anc in &chain {
            if anc != path && self.is_file(anc) {
                return Err(FsError::NotADirectory { path: anc.clone() });
            }
        }
        let now = SystemTime::now();
        let mut dirs = self.0.dirs.write().unwrap();
        let mut mtimes = self.0.dir_mtimes.write().unwrap();
        for anc in chain {
            if dirs.insert(anc.clone()) {
                mtimes.insert(anc, now);
            }
        }
        Ok(())
    }

    fn delete_dir(&self, path: &VfsPath) -> Result<(), FsError> {
        if path.is_root() {
            return Err(FsError::PreconditionViolation {
                path: path.clone(),
                reason: "cannot delete the root directory".to_string(),
            });
        }
        if self.is_file(path) {
            return Err(FsError::NotADirectory { path: path.clone() });
        }
        if !self.is_dir(path) {
            return Err(FsError::NotFound { path: path.clone() });
        }
        let mut dirs = self.0.dirs.write().unwrap();
        let mut mtimes = self.0.dir_mtimes.write().unwrap();
        let mut files = self.0.files.write().unwrap();
        dirs.retain(|p| !(p == path || p.is_self_or_descendant_of(path)));
        mtimes.retain(|p, _| !(p == path || p.is_self_or_descendant_of(path)));
        files.retain(|p, _| !p.is_self_or_descendant_of(path));
        Ok(())
    }

    fn delete_dir_contents(&self, path: &VfsPath) -> Result<(), FsError> {
        if self.is_file(path) {
            return Err(FsError::NotADirectory { path: path.clone() });
        }
        if !self.is_dir(path) {
            return Err(FsError::NotFound { path: path.clone() });
        }
        let mut dirs = self.0.dirs.write().unwrap();
        let mut mtimes = self.0.dir_mtimes.write().unwrap();
        let mut files = self.0.files.write().unwrap();
        dirs.retain(|p| p == path || !p.is_self_or_descendant_of(path));
        mtimes.retain(|p, _| p == path || !p.is_self_or_descendant_of(path));
        files.retain(|p, _| !p.is_self_or_descendant_of(path));
        Ok(())
    }
}

impl FsFileOps for MemoryFileSystem {
    fn delete_file(&self, path: &VfsPath) -> Result<(), FsError> {
        if self.0.files.write().unwrap().remove(path).is_some() {
            return Ok(());
        }
        if self.is_dir(path) {
            return Err(FsError::NotAFile { path: path.clone() });
        }
        Err(FsError::NotFound { path: path.clone() })
    }

    fn move_path(&self, src: &VfsPath, dst: &VfsPath) -> Result<(), FsError> {
        if src == dst {
            if !self.is_dir(src) && !self.is_file(src) {
                return Err(FsError::NotFound { path: src.clone() });
            }
            return Ok(());
        }
        if !self.is_dir(src) && !self.is_file(src) {
            return Err(FsError::NotFound { path: src.clone() });
        }
        if dst.is_self_or_descendant_of(src) {
            return Err(FsError::PreconditionViolation {
                path: dst.clone(),
                reason: "destination is the source or a descendant of it".to_string(),
            });
        }

        if self.is_dir(src) {
            if self.is_file(dst) {
                return Err(FsError::PreconditionViolation {
                    path: dst.clone(),
                    reason: "cannot move a directory onto a file".to_string(),
                });
            }
            if self.is_dir(dst) {
                if self.has_children(dst) {
                    return Err(FsError::AlreadyExists {
                        path: dst.clone(),
                        operation: "move_path",
                    });
                }
                self.remove_empty_dir_entry(dst);
            }
            self.rename_subtree(src, dst);
        } else {
            if self.is_dir(dst) {
                return Err(FsError::PreconditionViolation {
                    path: dst.clone(),
                    reason: "cannot move a file onto a directory".to_string(),
                });
            }
            let mut files = self.0.files.write().unwrap();
            let entry = files.remove(src).unwrap();
            files.insert(dst.clone(), entry);
        }
        Ok(())
    }

    fn copy_file(&self, src: &VfsPath, dst: &VfsPath) -> Result<(), FsError> {
        let data = {
            let files = self.0.files.read().unwrap();
            match files.get(src) {
                Some(entry) => entry.data.clone(),
                None if self.is_dir(src) => {
                    return Err(FsError::NotAFile { path: src.clone() });
                }
                None => return Err(FsError::NotFound { path: src.clone() }),
            }
        };
        if self.is_dir(dst) {
            return Err(FsError::PreconditionViolation {
                path: dst.clone(),
                reason: "cannot copy a file onto a directory".to_string(),
            });
        }
        self.0.files.write().unwrap().insert(
            dst.clone(),
            FileEntry {
                data,
                mtime: SystemTime::now(),
            },
        );
        Ok(())
    }
}

struct MemReader {
    data: Vec<u8>,
    pos: usize,
    closed: bool,
}

impl ByteStream for MemReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, FsError> {
        if self.closed {
            return Err(FsError::StreamClosed);
        }
        let remaining = &self.data[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }

    fn close(&mut self) -> Result<(), FsError> {
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

struct MemRandomReader {
    data: Vec<u8>,
    closed: bool,
}

impl RandomReader for MemRandomReader {
    fn size(&self) -> Result<u64, FsError> {
        Ok(self.data.len() as u64)
    }

    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, FsError> {
        if self.closed {
            return Err(FsError::StreamClosed);
        }
        let offset = offset as usize;
        if offset >= self.data.len() {
            return Ok(0);
        }
        let remaining = &self.data[offset..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        Ok(n)
    }

    fn close(&mut self) -> Result<(), FsError> {
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

struct MemWriter {
    shared: Arc<Shared>,
    path: VfsPath,
    buf: Vec<u8>,
    closed: bool,
}

impl ByteWriter for MemWriter {
    fn write(&mut self, buf: &[u8]) -> Result<(), FsError> {
        if self.closed {
            return Err(FsError::StreamClosed);
        }
        self.buf.extend_from_slice(buf);
        Ok(())
    }

    fn tell(&self) -> Result<u64, FsError> {
        if self.closed {
            return Err(FsError::StreamClosed);
        }
        Ok(self.buf.len() as u64)
    }

    fn flush(&mut self) -> Result<(), FsError> {
        if self.closed {
            return Err(FsError::StreamClosed);
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), FsError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.shared.files.write().unwrap().insert(
            self.path.clone(),
            FileEntry {
                data: std::mem::take(&mut self.buf),
                mtime: SystemTime::now(),
            },
        );
        if let Some(parent) = self.path.parent() {
            MemoryFileSystem(self.shared.clone()).touch_dir_mtime(&parent);
        }
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl FsStreams for MemoryFileSystem {
    fn open_input_stream(&self, path: &VfsPath) -> Result<Box<dyn ByteStream>, FsError> {
        let files = self.0.files.read().unwrap();
        match files.get(path) {
            Some(entry) => Ok(Box::new(MemReader {
                data: entry.data.clone(),
                pos: 0,
                closed: false,
            })),
            None if self.is_dir(path) => Err(FsError::NotAFile { path: path.clone() }),
            None => Err(FsError::NotFound { path: path.clone() }),
        }
    }

    fn open_input_file(&self, path: &VfsPath) -> Result<Box<dyn RandomReader>, FsError> {
        let files = self.0.files.read().unwrap();
        match files.get(path) {
            Some(entry) => Ok(Box::new(MemRandomReader {
                data: entry.data.clone(),
                closed: false,
            })),
            None if self.is_dir(path) => Err(FsError::NotAFile { path: path.clone() }),
            None => Err(FsError::NotFound { path: path.clone() }),
        }
    }

    fn open_output_stream(&self, path: &VfsPath) -> Result<Box<dyn ByteWriter>, FsError> {
        if self.is_dir(path) {
            return Err(FsError::PreconditionViolation {
                path: path.clone(),
                reason: "cannot write a file over a directory".to_string(),
            });
        }
        if let Some(parent) = path.parent() {
            if !parent.is_root()
                && !self.is_dir(&parent)
                && !self.capabilities().have_implicit_directories
            {
                return Err(FsError::NotFound { path: parent });
            }
        }
        Ok(Box::new(MemWriter {
            shared: self.0.clone(),
            path: path.clone(),
            buf: Vec::new(),
            closed: false,
        }))
    }

    fn open_append_stream(&self, path: &VfsPath) -> Result<Box<dyn ByteWriter>, FsError> {
        if self.is_dir(path) {
            return Err(FsError::NotAFile { path: path.clone() });
        }
        let initial = self
            .0
            .files
            .read()
            .unwrap()
            .get(path)
            .map(|entry| entry.data.clone())
            .unwrap_or_default();
        Ok(Box::new(MemWriter {
            shared: self.0.clone(),
            path: path.clone(),
            buf: initial,
            closed: false,
        }))
    }
}

impl FsCapabilities for MemoryFileSystem {
    fn capabilities(&self) -> CapabilityFlags {
        CapabilityFlags::default()
            .with_allow_move_dir(true)
            .with_allow_append_to_file(true)
            .with_directory_mtimes(true)
    }
}

fn _assert_is_filesystem<FS: FileSystem>(_: &FS) {}

#[test]
fn memory_filesystem_implements_filesystem() {
    _assert_is_filesystem(&MemoryFileSystem::new());
}

#[test]
fn memory_filesystem_honors_the_contract() {
    vfs_contract::conformance::run_all(MemoryFileSystem::new);
}
