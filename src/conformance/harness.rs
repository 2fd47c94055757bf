//! Shared assertions and fixtures used across conformance scenarios.

use crate::{FileStat, FileSystem, FileType, FsExt, FsList, Selector, VfsPath};

/// Every entry of `file_type` under the root, recursively, sorted by path.
pub(crate) fn get_all_with_type<FS: FileSystem>(fs: &FS, file_type: FileType) -> Vec<FileStat> {
    let selector = Selector::new(VfsPath::root()).recursive(true);
    let mut stats = fs.list(&selector).unwrap();
    stats.retain(|s| s.file_type == file_type);
    sort_stats(&mut stats);
    stats
}

/// Sort stats by path for order-independent comparisons.
pub(crate) fn sort_stats(stats: &mut [FileStat]) {
    stats.sort_by(|a, b| a.path.as_str().cmp(b.path.as_str()));
}

/// Assert that the set of directories in the filesystem is exactly `expected`.
pub(crate) fn assert_all_dirs<FS: FileSystem>(fs: &FS, expected: &[&str]) {
    let stats = get_all_with_type(fs, FileType::Directory);
    let actual: Vec<&str> = stats.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(actual, expected, "directory set mismatch");
}

/// Assert that the set of files in the filesystem is exactly `expected`.
pub(crate) fn assert_all_files<FS: FileSystem>(fs: &FS, expected: &[&str]) {
    let stats = get_all_with_type(fs, FileType::File);
    let actual: Vec<&str> = stats.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(actual, expected, "file set mismatch");
}

/// Create a file at `path` with `data`, creating it if absent and
/// truncating it if present.
pub(crate) fn create_file<FS: FileSystem>(fs: &FS, path: &str, data: &[u8]) {
    let p = VfsPath::parse(path).unwrap();
    fs.write_all(&p, data).unwrap();
}

/// Assert that `path` exists, is a file, and its contents equal `expected`.
pub(crate) fn assert_file_contents<FS: FileSystem>(fs: &FS, path: &str, expected: &[u8]) {
    let data = fs.read_to_end(&VfsPath::parse(path).unwrap()).unwrap();
    assert_eq!(data, expected, "contents mismatch for {path}");
}

/// Assert a stat's path and type.
pub(crate) fn assert_file_stat(stat: &FileStat, path: &str, file_type: FileType) {
    assert_eq!(stat.path.as_str(), path);
    assert_eq!(stat.file_type, file_type);
}

/// Assert a stat's path, type, and size.
pub(crate) fn assert_file_stat_with_size(stat: &FileStat, path: &str, file_type: FileType, size: u64) {
    assert_file_stat(stat, path, file_type);
    assert_eq!(stat.size, Some(size), "size mismatch for {path}");
}
