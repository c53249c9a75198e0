use crate::{Options, Tree, Value};
use std::fs;
use std::path::Path;

pub fn open_tree(dir: &Path) -> Tree {
    Tree::open(dir, Options::new()).unwrap()
}

pub fn open_with_threshold(dir: &Path, threshold: usize) -> Tree {
    Tree::open(dir, Options::new().threshold(threshold)).unwrap()
}

/// Asserts a fetch hit with the given byte-string value.
pub fn assert_fetch(tree: &Tree, key: &str, expected: &str) {
    assert_eq!(
        tree.fetch(key).unwrap(),
        Some(Value::from(expected)),
        "fetch({:?})",
        key
    );
}

/// Names of files in `dir` that match the segment grammar.
pub fn segment_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().to_str().map(|s| s.to_string()))
        .filter(|name| segment::is_segment_file(name))
        .collect();
    names.sort();
    names
}

/// Raw on-disk bytes of segment `n`.
pub fn segment_bytes(dir: &Path, n: u64) -> Vec<u8> {
    fs::read(segment::path(dir, n)).unwrap()
}

/// Size in bytes of the WAL file.
pub fn wal_len(dir: &Path) -> u64 {
    fs::metadata(wal::path(dir)).unwrap().len()
}
