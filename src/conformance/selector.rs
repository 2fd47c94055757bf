//! `Selector`-driven listing scenarios, including recursion depth limits.

use crate::{FileSystem, FsDirOps, FsError, FsList, Selector, VfsPath};

use super::harness::{create_file, sort_stats};

fn paths(stats: &[crate::FileStat]) -> Vec<&str> {
    stats.iter().map(|s| s.path.as_str()).collect()
}

/// Non-recursive listing returns only direct children; a missing or
/// non-directory `base_dir` is handled per `allow_non_existent`.
pub fn test_selector<FS: FileSystem>(fs: &FS) {
    fs.create_dir(&VfsPath::parse("AB/CD").unwrap(), true).unwrap();
    create_file(fs, "AB/abc", b"data");
    create_file(fs, "AB/CD/def", b"data");

    let mut top = fs.list(&Selector::new(VfsPath::root())).unwrap();
    sort_stats(&mut top);
    assert_eq!(paths(&top), vec!["AB"]);

    let mut ab = fs.list(&Selector::new(VfsPath::parse("AB").unwrap())).unwrap();
    sort_stats(&mut ab);
    assert_eq!(paths(&ab), vec!["AB/CD", "AB/abc"]);

    let missing = VfsPath::parse("nope").unwrap();
    let err = fs.list(&Selector::new(missing.clone())).unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));

    let empty = fs
        .list(&Selector::new(missing).allow_non_existent(true))
        .unwrap();
    assert!(empty.is_empty());

    let file_as_base = VfsPath::parse("AB/abc").unwrap();
    let err = fs.list(&Selector::new(file_as_base)).unwrap_err();
    assert!(matches!(err, FsError::NotADirectory { .. }));
}

/// `recursive` gates whether `max_recursion` has any effect at all, and
/// `max_recursion` bounds how many levels below `base_dir` are descended.
pub fn test_selector_with_recursion<FS: FileSystem>(fs: &FS) {
    fs.create_dir(&VfsPath::parse("AB/CD/EF").unwrap(), true).unwrap();
    create_file(fs, "AB/top.txt", b"0");
    create_file(fs, "AB/CD/mid.txt", b"1");
    create_file(fs, "AB/CD/EF/deep.txt", b"2");

    let base = VfsPath::parse("AB").unwrap();

    // non-recursive: only direct children, max_recursion is irrelevant
    let mut direct = fs
        .list(&Selector::new(base.clone()).max_recursion(5))
        .unwrap();
    sort_stats(&mut direct);
    assert_eq!(paths(&direct), vec!["AB/CD", "AB/top.txt"]);

    // recursive + max_recursion(0) behaves like non-recursive
    let mut zero = fs
        .list(&Selector::new(base.clone()).recursive(true).max_recursion(0))
        .unwrap();
    sort_stats(&mut zero);
    assert_eq!(paths(&zero), vec!["AB/CD", "AB/top.txt"]);

    // recursive + max_recursion(1) includes one level of descendants
    let mut one = fs
        .list(&Selector::new(base.clone()).recursive(true).max_recursion(1))
        .unwrap();
    sort_stats(&mut one);
    assert_eq!(
        paths(&one),
        vec!["AB/CD", "AB/CD/EF", "AB/CD/mid.txt", "AB/top.txt"]
    );

    // unbounded recursion includes everything below base_dir
    let mut all = fs.list(&Selector::new(base).recursive(true)).unwrap();
    sort_stats(&mut all);
    assert_eq!(
        paths(&all),
        vec![
            "AB/CD",
            "AB/CD/EF",
            "AB/CD/EF/deep.txt",
            "AB/CD/mid.txt",
            "AB/top.txt",
        ]
    );
}
