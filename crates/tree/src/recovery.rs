//! Cold-start path: opening a directory, rebuilding in-memory state.
//!
//! An existing directory is recovered by (1) collecting every filename that
//! matches the segment grammar, (2) streaming each segment to re-insert its
//! keys into a fresh bloom filter, and (3) replaying `db.wal` into a fresh
//! memtable. The WAL shares the segment framing, so replay is the ordinary
//! segment stream.

use bloom::BloomFilter;
use memtable::Memtable;
use segment::SegmentStream;
use std::fs;
use std::path::Path;
use wal::WalWriter;

use crate::{Options, Tree, TreeError};

impl Tree {
    /// Opens the tree rooted at `dir`, creating the directory if it does not
    /// exist and recovering state from whatever files it holds.
    ///
    /// Afterwards an empty (or replayed-but-intact) `db.wal` always exists.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or when a segment or WAL file is
    /// corrupt (truncated frames, unknown tags, unpaired terms).
    pub fn open<P: AsRef<Path>>(dir: P, options: Options) -> Result<Self, TreeError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        // Collect segment ids, newest first — the read path's search order.
        let mut segments = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if let Some(name) = name.to_str() {
                if segment::is_segment_file(name) {
                    segments.push(segment::num(name)?);
                }
            }
        }
        segments.sort_unstable_by(|a, b| b.cmp(a));

        // Rebuild the bloom from every segment's keys. Oldest first so the
        // insertion sequence matches the order flushes originally ran in.
        let mut bloom = BloomFilter::new();
        for &id in segments.iter().rev() {
            for pair in SegmentStream::open(segment::path(&dir, id))? {
                let (key, _value) = pair?;
                bloom.put(&codec::encode(&key));
            }
        }

        // Replay the WAL into a fresh memtable. Later writes overwrite
        // earlier ones because replay runs in insertion order.
        let mut mem = Memtable::new();
        let wal_path = wal::path(&dir);
        if wal_path.is_file() {
            for pair in SegmentStream::open(&wal_path)? {
                let (key, value) = pair?;
                mem.put(codec::encode(&key), codec::encode(&value));
            }
        }

        let wal = WalWriter::init(&dir)?;

        Ok(Self {
            dir,
            segments,
            threshold: options.threshold,
            mem,
            bloom,
            wal,
        })
    }
}
