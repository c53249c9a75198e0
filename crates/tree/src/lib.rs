//! # Tree — the silt storage orchestrator
//!
//! Ties the [`memtable`], [`wal`], [`bloom`], and [`segment`] crates together
//! into a single-node LSM-tree key-value store.
//!
//! ## Architecture
//!
//! ```text
//! Caller
//!   |
//!   v
//! ┌───────────────────────────────────────────────┐
//! │                    TREE                       │
//! │                                               │
//! │ write.rs → WAL append → Memtable insert       │
//! │              |                                │
//! │              |  (threshold exceeded?)         │
//! │              |            yes                 │
//! │              v                                │
//! │           flush() → new segment, WAL rotated  │
//! │                                               │
//! │ read.rs  → Memtable → bloom → segments        │
//! │             (newest segment first)            │
//! │                                               │
//! │ merge.rs → fuse two segments, newer key wins  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Module responsibilities
//!
//! | Module       | Purpose                                              |
//! |--------------|------------------------------------------------------|
//! | `lib.rs`     | `Tree` struct, error type, accessors, `Debug`        |
//! | [`recovery`] | `open`: directory scan, bloom rebuild, WAL replay    |
//! | [`write`]    | `put()` and `flush()`                                |
//! | [`read`]     | `fetch()`                                            |
//! | [`merge`]    | caller-driven segment merge                          |
//!
//! ## Recency
//!
//! ```text
//! ┌────────────────────────────┐  ← freshest, checked first
//! │ MEMTABLE                   │
//! ├────────────────────────────┤
//! │ segment-<highest id>.data  │
//! ├────────────────────────────┤
//! │ ...                        │
//! ├────────────────────────────┤
//! │ segment-1.data             │  ← oldest
//! └────────────────────────────┘
//! ```
//!
//! ## Crash safety
//!
//! Every put is appended (and synced) to the WAL **before** the memtable
//! insert. The WAL is only rotated after the segment write has synced. A
//! crash mid-flush leaves a partial segment that the stream reader rejects at
//! read time rather than silently dropping data.
//!
//! The tree is a single-writer store: `put`, `flush`, and `merge` must be
//! serialized by the caller, and `fetch` must not race them.

mod merge;
mod read;
mod recovery;
mod write;

use bloom::BloomFilter;
use codec::CodecError;
use memtable::Memtable;
use segment::SegmentError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wal::WalWriter;

pub use codec::Value;
pub use config::Options;

/// Errors surfaced by tree operations.
#[derive(Debug, Error)]
pub enum TreeError {
    /// `merge` was asked to merge a segment with itself.
    #[error("cannot merge segment {0} with itself")]
    SelfMerge(u64),

    /// `merge` arguments were reversed: the first id must be the older
    /// (smaller) one.
    #[error("merge ids out of order: {0} is not older than {1}")]
    OutOfOrderMerge(u64, u64),

    /// A segment (or WAL) file could not be read or written.
    #[error(transparent)]
    Segment(#[from] SegmentError),

    /// A stored frame failed to decode.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// An underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A single-node LSM-tree over one directory.
///
/// The directory holds `db.wal` plus zero or more immutable
/// `segment-<n>.data` files. In-memory state is the sorted write buffer, the
/// membership filter over segment keys, and the segment id list (newest
/// first), which is the authoritative search order on reads.
pub struct Tree {
    pub(crate) dir: PathBuf,
    /// Known segment ids, descending — higher id means newer.
    pub(crate) segments: Vec<u64>,
    /// Memtable byte-size threshold that triggers a flush.
    pub(crate) threshold: usize,
    pub(crate) mem: Memtable,
    /// Tracks segment keys only; a key living solely in the memtable is not
    /// required to appear here.
    pub(crate) bloom: BloomFilter,
    pub(crate) wal: WalWriter,
}

impl Tree {
    /// Returns the directory this tree owns.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.dir
    }

    /// Returns the known segment ids, newest first.
    #[must_use]
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Returns the flush threshold in bytes.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the memtable's current byte-size estimate.
    #[must_use]
    pub fn memtable_byte_size(&self) -> usize {
        self.mem.byte_size()
    }

    /// Returns the membership filter over segment keys.
    #[must_use]
    pub fn bloom(&self) -> &BloomFilter {
        &self.bloom
    }
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("directory", &self.dir)
            .field("segments", &self.segments)
            .field("threshold", &self.threshold)
            .field("memtable_bytes", &self.mem.byte_size())
            .field("memtable_entries", &self.mem.len())
            .field("bloom_size", &self.bloom.size())
            .finish()
    }
}

#[cfg(test)]
mod tests;
