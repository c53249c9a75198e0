//! # WAL — Write-Ahead Log
//!
//! Crash-safe durability for the silt storage tree.
//!
//! Every put is serialized into a framed `(key, value)` pair and appended to
//! `<dir>/db.wal` **before** the in-memory update. The file carries no
//! envelope of its own — no sequence numbers, no checksums — it is the same
//! concatenation of codec frames a segment holds, just in insertion order
//! instead of key order. Recovery therefore replays it with the ordinary
//! segment stream reader.
//!
//! The WAL mirrors the current memtable: after a successful flush the tree
//! removes it and re-initializes an empty one ([`remove`] + [`WalWriter::init`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use wal::WalWriter;
//!
//! let mut w = WalWriter::init("data/tree").unwrap();
//! w.append(b"s\x00\x00\x00\x01ks\x00\x00\x00\x01v").unwrap();
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Name of the log file inside a tree directory.
pub const WAL_FILENAME: &str = "db.wal";

/// Returns the log path for a tree directory: `<dir>/db.wal`.
#[must_use]
pub fn path(dir: &Path) -> PathBuf {
    dir.join(WAL_FILENAME)
}

/// Removes the log file from a tree directory.
pub fn remove<P: AsRef<Path>>(dir: P) -> io::Result<()> {
    fs::remove_file(path(dir.as_ref()))
}

/// Append-only WAL handle.
///
/// Every append is followed by `sync_all()` so the bytes are durable on disk
/// before the corresponding memtable insert happens.
#[derive(Debug)]
pub struct WalWriter {
    file: File,
}

impl WalWriter {
    /// Opens (or creates) `<dir>/db.wal` in append mode, creating `dir`
    /// recursively if it does not exist. Existing log contents are preserved.
    pub fn init<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path(dir))?;
        Ok(Self { file })
    }

    /// Appends pre-framed bytes and syncs them to disk.
    pub fn append(&mut self, framed: &[u8]) -> io::Result<()> {
        self.file.write_all(framed)?;
        self.file.sync_all()
    }
}
