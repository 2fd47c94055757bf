//! Directory creation, deletion, and content-clearing scenarios.

use crate::{FileSystem, FsDirOps, FsError, VfsPath};

use super::harness::{assert_all_dirs, assert_all_files, create_file};

/// A freshly constructed filesystem has no directories or files.
pub fn test_empty<FS: FileSystem>(fs: &FS) {
    assert_all_dirs(fs, &[]);
    assert_all_files(fs, &[]);
}

/// `create_dir(path, recursive=true)` creates missing ancestors, is
/// idempotent, and refuses to descend through a file (spec §4.5,
/// invariant 1).
pub fn test_create_dir<FS: FileSystem>(fs: &FS) {
    let ab = VfsPath::parse("AB").unwrap();
    fs.create_dir(&ab, true).unwrap();
    assert_all_dirs(fs, &["AB"]);

    // idempotent: creating an existing directory succeeds
    fs.create_dir(&ab, true).unwrap();
    assert_all_dirs(fs, &["AB"]);

    // missing ancestors are created along the way
    let nested = VfsPath::parse("AB/CD/EF").unwrap();
    fs.create_dir(&nested, true).unwrap();
    assert_all_dirs(fs, &["AB", "AB/CD", "AB/CD/EF"]);

    // a file cannot be a parent directory
    create_file(fs, "AB/CD/afile.txt", b"data");
    let bad = VfsPath::parse("AB/CD/afile.txt/sub").unwrap();
    let err = fs.create_dir(&bad, true).unwrap_err();
    assert!(matches!(err, FsError::NotADirectory { .. }));
}

/// `create_dir(path, recursive=false)` requires the parent to already
/// exist, is idempotent, and still refuses to descend through a file.
/// Follows spec §8 S1 exactly: "AB" (recursive), "AB/GH" (non-recursive
/// after parent exists), "AB/GH/IJ" twice (idempotent), "XY", then a
/// file "AB/def" that both a recursive and a non-recursive create under
/// it must reject.
pub fn test_create_dir_non_recursive<FS: FileSystem>(fs: &FS) {
    fs.create_dir(&VfsPath::parse("AB").unwrap(), true).unwrap();
    fs.create_dir(&VfsPath::parse("AB/CD/EF").unwrap(), true)
        .unwrap();

    // non-recursive create succeeds once its direct parent exists
    let gh = VfsPath::parse("AB/GH").unwrap();
    fs.create_dir(&gh, false).unwrap();

    // non-recursive create is idempotent
    let ij = VfsPath::parse("AB/GH/IJ").unwrap();
    fs.create_dir(&ij, false).unwrap();
    fs.create_dir(&ij, false).unwrap();

    fs.create_dir(&VfsPath::parse("XY").unwrap(), false)
        .unwrap();

    assert_all_dirs(
        fs,
        &["AB", "AB/CD", "AB/CD/EF", "AB/GH", "AB/GH/IJ", "XY"],
    );

    // non-recursive create fails when the parent does not yet exist
    let orphan = VfsPath::parse("no-parent/child").unwrap();
    let err = fs.create_dir(&orphan, false).unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));

    create_file(fs, "AB/def", b"data");

    let through_file_recursive = VfsPath::parse("AB/def/EF/GH").unwrap();
    let err = fs.create_dir(&through_file_recursive, true).unwrap_err();
    assert!(matches!(err, FsError::NotADirectory { .. }));

    let through_file_non_recursive = VfsPath::parse("AB/def/EF").unwrap();
    let err = fs
        .create_dir(&through_file_non_recursive, false)
        .unwrap_err();
    assert!(matches!(err, FsError::NotADirectory { .. }));

    assert_all_dirs(
        fs,
        &["AB", "AB/CD", "AB/CD/EF", "AB/GH", "AB/GH/IJ", "XY"],
    );
    assert_all_files(fs, &["AB/def"]);
}

/// `delete_dir` removes a directory and everything beneath it.
pub fn test_delete_dir<FS: FileSystem>(fs: &FS) {
    let ab = VfsPath::parse("AB").unwrap();
    fs.create_dir(&ab, true).unwrap();
    create_file(fs, "AB/abc", b"data");
    fs.create_dir(&VfsPath::parse("AB/CD").unwrap(), true)
        .unwrap();
    create_file(fs, "AB/CD/def", b"data");

    fs.delete_dir(&ab).unwrap();
    assert_all_dirs(fs, &[]);
    assert_all_files(fs, &[]);

    let err = fs.delete_dir(&ab).unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));

    create_file(fs, "file.txt", b"data");
    let file = VfsPath::parse("file.txt").unwrap();
    let err = fs.delete_dir(&file).unwrap_err();
    assert!(matches!(err, FsError::NotADirectory { .. }));

    // a backend must refuse to delete its own root (spec §4.5, §8 S2)
    let err = fs.delete_dir(&VfsPath::root()).unwrap_err();
    assert!(err.is_io_error());
    assert_all_dirs(fs, &[]);
    assert_all_files(fs, &["file.txt"]);
}

/// `delete_dir_contents` empties a directory without removing it, and can
/// be used with the root path to wipe the whole filesystem.
pub fn test_delete_dir_contents<FS: FileSystem>(fs: &FS) {
    fs.create_dir(&VfsPath::parse("AB/CD").unwrap(), true)
        .unwrap();
    create_file(fs, "AB/abc", b"data");
    create_file(fs, "AB/CD/def", b"data");

    fs.delete_dir_contents(&VfsPath::parse("AB").unwrap())
        .unwrap();
    assert_all_dirs(fs, &["AB"]);
    assert_all_files(fs, &[]);

    fs.create_dir(&VfsPath::parse("XY").unwrap(), true).unwrap();
    create_file(fs, "top.txt", b"data");
    fs.delete_dir_contents(&VfsPath::root()).unwrap();
    assert_all_dirs(fs, &[]);
    assert_all_files(fs, &[]);
}
