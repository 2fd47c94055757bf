//! File deletion, batch deletion, moving, and copying scenarios.

use crate::{FileSystem, FsCapabilities, FsDirOps, FsError, FsExt, FsFileOps, VfsPath};

use super::harness::{assert_all_files, assert_file_contents, create_file};

/// `delete_file` removes a single file and rejects missing paths or
/// directories.
pub fn test_delete_file<FS: FileSystem>(fs: &FS) {
    create_file(fs, "abc", b"data");
    assert_all_files(fs, &["abc"]);

    let p = VfsPath::parse("abc").unwrap();
    fs.delete_file(&p).unwrap();
    assert_all_files(fs, &[]);

    let err = fs.delete_file(&p).unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));

    fs.create_dir(&VfsPath::parse("AB").unwrap(), true).unwrap();
    let err = fs.delete_file(&VfsPath::parse("AB").unwrap()).unwrap_err();
    assert!(matches!(err, FsError::NotAFile { .. }));
}

/// `delete_files` is best-effort: valid paths in a mixed batch are still
/// deleted even though the call as a whole reports the first error.
pub fn test_delete_files<FS: FileSystem>(fs: &FS) {
    create_file(fs, "a", b"1");
    create_file(fs, "c", b"3");

    let paths = vec![
        VfsPath::parse("a").unwrap(),
        VfsPath::parse("b").unwrap(),
        VfsPath::parse("c").unwrap(),
    ];
    let err = fs.delete_files(&paths).unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));

    assert_all_files(fs, &[]);
}

/// `move_path` renames a file, tolerates a self-move, and clobbers an
/// existing destination file.
pub fn test_move_file<FS: FileSystem>(fs: &FS) {
    create_file(fs, "src.txt", b"original");
    let src = VfsPath::parse("src.txt").unwrap();
    let dst = VfsPath::parse("dst.txt").unwrap();

    fs.move_path(&src, &dst).unwrap();
    assert!(!fs.exists(&src).unwrap());
    assert_file_contents(fs, "dst.txt", b"original");

    let err = fs
        .move_path(&src, &VfsPath::parse("other.txt").unwrap())
        .unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));

    // moving a path onto itself is a no-op that must not lose data
    fs.move_path(&dst, &dst).unwrap();
    assert_file_contents(fs, "dst.txt", b"original");

    // moving onto an existing file clobbers it
    create_file(fs, "clobber.txt", b"old");
    fs.move_path(&dst, &VfsPath::parse("clobber.txt").unwrap())
        .unwrap();
    assert_file_contents(fs, "clobber.txt", b"original");
    assert!(!fs.exists(&dst).unwrap());
}

/// `move_path` on a directory is gated on `allow_move_dir`, and even when
/// supported must reject moving a directory into itself or one of its
/// own descendants.
pub fn test_move_dir<FS: FileSystem>(fs: &FS) {
    if !fs.capabilities().allow_move_dir {
        return;
    }

    fs.create_dir(&VfsPath::parse("AB/CD").unwrap(), true).unwrap();
    create_file(fs, "AB/CD/file.txt", b"data");

    let src = VfsPath::parse("AB").unwrap();
    let dst = VfsPath::parse("XY").unwrap();
    fs.move_path(&src, &dst).unwrap();
    assert!(!fs.exists(&src).unwrap());
    assert_file_contents(fs, "XY/CD/file.txt", b"data");

    // cannot move a directory into itself or a descendant of itself
    let descendant = VfsPath::parse("XY/CD").unwrap();
    let err = fs.move_path(&dst, &descendant).unwrap_err();
    assert!(matches!(err, FsError::PreconditionViolation { .. }));

    // moving a directory onto itself is a no-op that must not lose data
    fs.move_path(&dst, &dst).unwrap();
    assert_file_contents(fs, "XY/CD/file.txt", b"data");

    // cannot move into a directory that already has entries
    fs.create_dir(&VfsPath::parse("ZZ").unwrap(), true).unwrap();
    create_file(fs, "ZZ/existing.txt", b"stuff");
    let err = fs
        .move_path(&dst, &VfsPath::parse("ZZ").unwrap())
        .unwrap_err();
    assert!(matches!(
        err,
        FsError::AlreadyExists { .. } | FsError::PreconditionViolation { .. }
    ));
}

/// `copy_file` duplicates a file's contents without aliasing: writing to
/// the destination afterward must not affect the source.
pub fn test_copy_file<FS: FileSystem>(fs: &FS) {
    create_file(fs, "src.txt", b"payload");
    let src = VfsPath::parse("src.txt").unwrap();
    let dst = VfsPath::parse("dst.txt").unwrap();

    fs.copy_file(&src, &dst).unwrap();
    assert_file_contents(fs, "src.txt", b"payload");
    assert_file_contents(fs, "dst.txt", b"payload");

    fs.write_all(&dst, b"changed").unwrap();
    assert_file_contents(fs, "src.txt", b"payload");
    assert_file_contents(fs, "dst.txt", b"changed");

    let missing = VfsPath::parse("missing.txt").unwrap();
    let err = fs
        .copy_file(&missing, &VfsPath::parse("other.txt").unwrap())
        .unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));

    fs.create_dir(&VfsPath::parse("AB").unwrap(), true).unwrap();
    let err = fs
        .copy_file(&VfsPath::parse("AB").unwrap(), &VfsPath::parse("AB2").unwrap())
        .unwrap_err();
    assert!(matches!(err, FsError::NotAFile { .. }));
}
