//! Stream-opening scenarios: sequential and random-access reads, writes,
//! and appends.

use crate::{FileSystem, FsCapabilities, FsDirOps, FsError, FsExt, FsStreams, VfsPath};

use super::harness::create_file;

/// `open_output_stream` creates a new file, truncates an existing one,
/// and rejects further writes once closed.
pub fn test_open_output_stream<FS: FileSystem>(fs: &FS) {
    let p = VfsPath::parse("new-file.txt").unwrap();
    {
        let mut stream = fs.open_output_stream(&p).unwrap();
        assert_eq!(stream.tell().unwrap(), 0);
        stream.write(b"some ").unwrap();
        stream.write(b"data").unwrap();
        assert_eq!(stream.tell().unwrap(), 9);
        stream.close().unwrap();
    }
    assert_eq!(fs.read_to_end(&p).unwrap(), b"some data");

    // re-opening truncates prior contents
    {
        let mut stream = fs.open_output_stream(&p).unwrap();
        stream.write(b"short").unwrap();
        stream.close().unwrap();
    }
    assert_eq!(fs.read_to_end(&p).unwrap(), b"short");

    let mut stream = fs.open_output_stream(&p).unwrap();
    stream.write(b"x").unwrap();
    stream.close().unwrap();
    assert!(stream.is_closed());
    let err = stream.write(b"y").unwrap_err();
    assert!(matches!(err, FsError::StreamClosed));
    // closing twice is a no-op
    assert!(stream.close().is_ok());

    // a missing parent directory is an IOError unless the backend treats
    // directories as implicit (spec §4.1)
    if !fs.capabilities().have_implicit_directories {
        let orphan = VfsPath::parse("AB/def").unwrap();
        let err = fs.open_output_stream(&orphan).unwrap_err();
        assert!(err.is_io_error());
    }

    // writing a file where a directory exists is rejected unless the
    // backend advertises allow_write_file_over_dir (spec §4.1)
    if !fs.capabilities().allow_write_file_over_dir {
        let dir = VfsPath::parse("a-directory").unwrap();
        fs.create_dir(&dir, true).unwrap();
        let err = fs.open_output_stream(&dir).unwrap_err();
        assert!(err.is_io_error());
    }
}

/// `open_append_stream` is gated on `allow_append_to_file`; when
/// supported, writes are appended to any existing content.
pub fn test_open_append_stream<FS: FileSystem>(fs: &FS) {
    if !fs.capabilities().allow_append_to_file {
        let p = VfsPath::parse("whatever.txt").unwrap();
        let err = fs.open_append_stream(&p).unwrap_err();
        assert!(matches!(err, FsError::NotSupported { .. }));
        return;
    }

    create_file(fs, "log.txt", b"first");
    let p = VfsPath::parse("log.txt").unwrap();
    let mut stream = fs.open_append_stream(&p).unwrap();
    assert_eq!(stream.tell().unwrap(), 5);
    stream.write(b"-second").unwrap();
    stream.close().unwrap();
    assert_eq!(fs.read_to_end(&p).unwrap(), b"first-second");

    // appending to a file that doesn't exist yet creates it
    let fresh = VfsPath::parse("fresh.txt").unwrap();
    let mut stream = fs.open_append_stream(&fresh).unwrap();
    stream.write(b"hi").unwrap();
    stream.close().unwrap();
    assert_eq!(fs.read_to_end(&fresh).unwrap(), b"hi");
}

/// `open_input_stream` reads sequentially to EOF and rejects missing
/// paths and directories.
pub fn test_open_input_stream<FS: FileSystem>(fs: &FS) {
    create_file(fs, "data.txt", b"0123456789");
    let p = VfsPath::parse("data.txt").unwrap();

    let mut stream = fs.open_input_stream(&p).unwrap();
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    assert_eq!(buf, b"0123456789");
    assert_eq!(stream.read(&mut chunk).unwrap(), 0);
    stream.close().unwrap();
    assert!(stream.close().is_ok());

    let missing = VfsPath::parse("missing.txt").unwrap();
    let err = fs.open_input_stream(&missing).unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));
}

/// `open_input_file` supports random-access reads and reports the exact
/// file size up front.
pub fn test_open_input_file<FS: FileSystem>(fs: &FS) {
    create_file(fs, "random.bin", b"abcdefghij");
    let p = VfsPath::parse("random.bin").unwrap();

    let mut reader = fs.open_input_file(&p).unwrap();
    assert_eq!(reader.size().unwrap(), 10);

    let mut buf = [0u8; 4];
    assert_eq!(reader.read_at(3, &mut buf).unwrap(), 4);
    assert_eq!(&buf, b"defg");

    assert_eq!(reader.read_at(8, &mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"ij");

    assert_eq!(reader.read_at(10, &mut buf).unwrap(), 0);

    reader.close().unwrap();
    assert!(reader.is_closed());
}
