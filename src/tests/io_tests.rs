//! Tests for fixture source implementations.

use std::io::{Read, Seek, SeekFrom, Write};

use crate::{FileSource, FixtureSource, InMemorySource};

#[test]
fn in_memory_source_reads_data() {
    let src = InMemorySource::from_string("id", "hello");

    let mut reader = src.open().expect("open in-memory source");
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "hello");
}

#[test]
fn each_open_yields_a_fresh_stream() {
    let src = InMemorySource::from_string("id", "abcdef");

    let mut first = src.open().unwrap();
    let mut partial = [0u8; 3];
    first.read_exact(&mut partial).unwrap();

    // A second open starts at the beginning regardless of the first stream.
    let mut second = src.open().unwrap();
    let mut buf = String::new();
    second.read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "abcdef");
}

#[test]
fn opened_streams_are_rewindable() {
    let src = InMemorySource::from_string("id", "rewind me");

    let mut stream = src.open().unwrap();
    let mut buf = String::new();
    stream.read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "rewind me");

    stream.seek(SeekFrom::Start(0)).unwrap();
    let mut again = String::new();
    stream.read_to_string(&mut again).unwrap();
    assert_eq!(again, "rewind me");
}

#[test]
fn file_source_reads_file_contents() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("fixture.nt");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(b"<a> <b> <c> .").unwrap();

    let src = FileSource::new(&path);
    assert_eq!(src.id(), path.to_string_lossy());

    let mut reader = src.open().unwrap();
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "<a> <b> <c> .");
}

#[test]
fn file_source_open_fails_for_missing_file() {
    let src = FileSource::new("/nonexistent/fixture.ttl");
    assert!(src.open().is_err());
}
