//! Tests for the fixture cache.

use crate::{CacheError, FixtureCache};

#[test]
fn open_creates_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("uri-cache");
    assert!(!dir.exists());

    let cache = FixtureCache::open(&dir).unwrap();
    assert!(dir.is_dir());
    assert!(cache.is_empty());
}

#[test]
fn store_and_load_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = FixtureCache::open(tmp.path()).unwrap();

    cache
        .store("http://example.org/data.ttl", b"@prefix ex: <e> .")
        .unwrap();

    assert!(cache.contains("http://example.org/data.ttl"));
    assert_eq!(cache.len(), 1);
    assert_eq!(
        cache.load("http://example.org/data.ttl").unwrap().unwrap(),
        b"@prefix ex: <e> .".to_vec()
    );
    assert!(cache.load("http://example.org/other").unwrap().is_none());
}

#[test]
fn entries_survive_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let mut cache = FixtureCache::open(tmp.path()).unwrap();
        cache.store("http://example.org/a", b"aaa").unwrap();
        cache.store("http://example.org/b", b"bbb").unwrap();
    }

    let cache = FixtureCache::open(tmp.path()).unwrap();
    assert_eq!(cache.len(), 2);
    assert_eq!(
        cache.load("http://example.org/a").unwrap().unwrap(),
        b"aaa".to_vec()
    );
    assert_eq!(
        cache.load("http://example.org/b").unwrap().unwrap(),
        b"bbb".to_vec()
    );
}

#[test]
fn store_overwrites_previous_payload() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = FixtureCache::open(tmp.path()).unwrap();

    cache.store("http://example.org/a", b"old").unwrap();
    cache.store("http://example.org/a", b"new").unwrap();

    assert_eq!(cache.len(), 1);
    assert_eq!(
        cache.load("http://example.org/a").unwrap().unwrap(),
        b"new".to_vec()
    );
}

#[test]
fn remove_deletes_entry() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = FixtureCache::open(tmp.path()).unwrap();

    cache.store("http://example.org/a", b"aaa").unwrap();
    assert!(cache.remove("http://example.org/a").unwrap());
    assert!(!cache.remove("http://example.org/a").unwrap());
    assert!(!cache.contains("http://example.org/a"));
    assert!(cache.load("http://example.org/a").unwrap().is_none());
}

#[test]
fn fetch_runs_once_per_uri() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = FixtureCache::open(tmp.path()).unwrap();
    let mut calls = 0;

    let bytes = cache
        .get_or_fetch_with("http://example.org/a", || {
            calls += 1;
            Ok(b"fetched".to_vec())
        })
        .unwrap();
    assert_eq!(bytes, b"fetched".to_vec());
    assert_eq!(calls, 1);

    // Second call is a hit; the closure must not run again.
    let bytes = cache
        .get_or_fetch_with("http://example.org/a", || {
            calls += 1;
            Ok(b"refetched".to_vec())
        })
        .unwrap();
    assert_eq!(bytes, b"fetched".to_vec());
    assert_eq!(calls, 1);
}

#[test]
fn failed_fetch_leaves_cache_unchanged() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = FixtureCache::open(tmp.path()).unwrap();

    let err = cache
        .get_or_fetch_with("http://example.org/missing", || {
            Err("connection refused".into())
        })
        .unwrap_err();

    match err {
        CacheError::Fetch { uri, .. } => assert_eq!(uri, "http://example.org/missing"),
        other => panic!("expected Fetch error, got {other}"),
    }
    assert!(!cache.contains("http://example.org/missing"));
    assert!(cache.is_empty());
}
