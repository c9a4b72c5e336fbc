#![cfg(feature = "std")]

use std::io::Write;

use sm3::{hash_bytes, hash_file, read_file, Error};

#[test]
fn file_matches_memory() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let contents: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    file.write_all(&contents).unwrap();
    file.flush().unwrap();

    assert_eq!(
        hash_file(file.path()).unwrap(),
        hash_bytes(&contents).unwrap()
    );
    assert_eq!(read_file(file.path()).unwrap(), contents);
}

#[test]
fn file_lengths_around_block_boundary_match_memory() {
    for len in [55usize, 56, 63, 64, 119, 120, 4096] {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents = vec![0x5au8; len];
        file.write_all(&contents).unwrap();
        file.flush().unwrap();
        assert_eq!(
            hash_file(file.path()).unwrap(),
            hash_bytes(&contents).unwrap(),
            "len {}",
            len
        );
    }
}

#[test]
fn empty_file_matches_empty_input() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert_eq!(hash_file(file.path()).unwrap(), hash_bytes(b"").unwrap());
}

#[test]
fn missing_file_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist");
    match hash_file(&path) {
        Err(Error::FileOpen { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected FileOpen, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn directory_is_read_error() {
    // Opening a directory succeeds on unix; reading from it fails.
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        hash_file(dir.path()),
        Err(Error::FileRead { .. })
    ));
}
