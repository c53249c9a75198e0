//! Write path: `put()` and `flush()`.
//!
//! Every put is appended to the WAL before the memtable insert. When the
//! memtable's byte size crosses the threshold, the put seals it into a new
//! segment via `flush()`.

use memtable::Memtable;
use segment::SegmentWriter;
use wal::WalWriter;

use crate::{Tree, TreeError, Value};

impl Tree {
    /// Inserts a key-value pair, overwriting any prior value for the key.
    ///
    /// The framed pair is appended (and synced) to the WAL first, then
    /// inserted into the memtable. If the memtable's byte size now exceeds
    /// the threshold, the memtable is flushed to a new segment and the WAL is
    /// rotated before this call returns.
    pub fn put(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Result<(), TreeError> {
        let key = key.into();
        let value = value.into();

        let key_bytes = codec::encode(&key);
        let value_bytes = codec::encode(&value);

        let mut frame = Vec::with_capacity(key_bytes.len() + value_bytes.len());
        frame.extend_from_slice(&key_bytes);
        frame.extend_from_slice(&value_bytes);
        self.wal.append(&frame)?;

        self.mem.put(key_bytes, value_bytes);

        if self.mem.byte_size() > self.threshold {
            self.flush()?;
        }
        Ok(())
    }

    /// Seals the memtable as a new segment and rotates the WAL.
    ///
    /// The new segment id is one past the highest existing id. Pairs are
    /// written in ascending encoded-key order with create + write + sync;
    /// every key is inserted into the bloom; the memtable and WAL come back
    /// empty. A no-op when the memtable is empty.
    pub fn flush(&mut self) -> Result<(), TreeError> {
        if self.mem.is_empty() {
            return Ok(());
        }

        // `segments` is descending, so the head is the highest id.
        let id = self.segments.first().copied().unwrap_or(0) + 1;
        let path = segment::path(&self.dir, id);
        SegmentWriter::write_memtable(&path, &self.mem)?;

        for (key, _value) in self.mem.iter() {
            self.bloom.put(key);
        }

        self.segments.insert(0, id);
        self.mem = Memtable::new();

        // The WAL mirrored the memtable that was just sealed; rotate it.
        wal::remove(&self.dir)?;
        self.wal = WalWriter::init(&self.dir)?;

        Ok(())
    }
}
