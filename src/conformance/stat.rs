//! Single- and batch-path status query scenarios.

use std::time::SystemTime;

use crate::{FileStat, FileSystem, FileType, FsCapabilities, FsDirOps, FsStat, VfsPath};

use super::harness::{assert_file_stat, assert_file_stat_with_size, create_file};
use super::TIME_SLACK;

/// `stat` reports non-existence rather than erroring, and carries type,
/// size, and (when applicable) mtime for files and directories.
pub fn test_stat_single<FS: FileSystem>(fs: &FS) {
    let missing = VfsPath::parse("nope").unwrap();
    let stat = fs.stat(&missing).unwrap();
    assert_file_stat(&stat, "nope", FileType::NonExistent);
    assert_eq!(stat.size, None);
    assert_eq!(stat.mtime, None);

    // stat also tolerates a path whose parent does not exist
    let deep_missing = VfsPath::parse("a/b/c").unwrap();
    assert!(fs.stat(&deep_missing).unwrap().is_non_existent());

    create_file(fs, "file.txt", b"hello");
    let stat = fs.stat(&VfsPath::parse("file.txt").unwrap()).unwrap();
    assert_file_stat_with_size(&stat, "file.txt", FileType::File, 5);

    fs.create_dir(&VfsPath::parse("dir").unwrap(), true).unwrap();
    let stat = fs.stat(&VfsPath::parse("dir").unwrap()).unwrap();
    assert_file_stat(&stat, "dir", FileType::Directory);
    assert_eq!(stat.size, None);
    if fs.capabilities().have_directory_mtimes {
        assert!(stat.mtime.is_some());
    }
}

/// On a backend with `have_directory_mtimes`, creating a child under a
/// directory bumps that directory's mtime, and the child's own mtime is
/// no older than the moment the directory was first created (spec
/// invariant 8), within [`TIME_SLACK`] of clock imprecision.
pub fn test_directory_mtime_on_child_creation<FS: FileSystem>(fs: &FS) {
    if !fs.capabilities().have_directory_mtimes {
        return;
    }

    let dir = VfsPath::parse("dir").unwrap();
    let t0 = SystemTime::now();
    fs.create_dir(&dir, true).unwrap();
    let before = fs.stat(&dir).unwrap();
    let mtime_before = before.mtime.expect("have_directory_mtimes implies mtime");

    create_file(fs, "dir/child.txt", b"data");

    let after = fs.stat(&dir).unwrap();
    let mtime_after = after.mtime.expect("have_directory_mtimes implies mtime");
    assert!(
        mtime_after >= mtime_before,
        "directory mtime must not go backwards after a child is created"
    );

    let child = fs.stat(&VfsPath::parse("dir/child.txt").unwrap()).unwrap();
    let child_mtime = child.mtime.expect("files always carry mtime");
    assert!(
        child_mtime + TIME_SLACK >= t0,
        "child mtime must not predate the directory's creation by more than TIME_SLACK"
    );
}

/// `stat_many` preserves input order and reports each path independently.
pub fn test_stat_many<FS: FileSystem>(fs: &FS) {
    create_file(fs, "a.txt", b"aa");
    fs.create_dir(&VfsPath::parse("dir").unwrap(), true).unwrap();

    let paths = vec![
        VfsPath::parse("a.txt").unwrap(),
        VfsPath::parse("missing").unwrap(),
        VfsPath::parse("dir").unwrap(),
    ];
    let stats: Vec<FileStat> = fs.stat_many(&paths).unwrap();
    assert_eq!(stats.len(), 3);
    assert_file_stat_with_size(&stats[0], "a.txt", FileType::File, 2);
    assert_file_stat(&stats[1], "missing", FileType::NonExistent);
    assert_file_stat(&stats[2], "dir", FileType::Directory);
}
