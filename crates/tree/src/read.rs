//! Read path: `fetch()`.
//!
//! Point lookups check the memtable first (freshest data), then consult the
//! bloom filter — a negative answer proves the key is in no segment — and
//! only then scan segments newest-first. The first match wins.

use segment::SegmentStream;

use crate::{Tree, TreeError, Value};

impl Tree {
    /// Looks up a key, returning its value if present.
    ///
    /// Bloom false positives are tolerated: they just mean the segment scan
    /// runs and comes back empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment read fails (corruption, I/O).
    pub fn fetch(&self, key: impl Into<Value>) -> Result<Option<Value>, TreeError> {
        let key_bytes = codec::encode(&key.into());

        // 1. Memtable holds the most recent write for a key, if any.
        if let Some(value_bytes) = self.mem.fetch(&key_bytes) {
            return Ok(Some(decode_frame(value_bytes)?));
        }

        // 2. True negative: the key is in no segment.
        if !self.bloom.member(&key_bytes) {
            return Ok(None);
        }

        // 3. Newest segment first; the first match is the most recent value.
        for &id in &self.segments {
            let path = segment::path(&self.dir, id);
            for pair in SegmentStream::open(&path)? {
                let (k, v) = pair?;
                if codec::encode(&k) == key_bytes {
                    return Ok(Some(v));
                }
            }
        }

        Ok(None)
    }
}

/// Decodes the single complete frame a memtable entry holds.
fn decode_frame(bytes: &[u8]) -> Result<Value, TreeError> {
    match codec::decode_one(bytes)? {
        codec::Decoded::Term(value, _) => Ok(value),
        // the memtable only ever stores complete frames
        codec::Decoded::Done | codec::Decoded::Partial => {
            unreachable!("memtable frames are complete")
        }
    }
}
