//! Two-way sorted merge over segment files.
//!
//! Produces `(key, value)` pairs ascending by encoded key. When the same key
//! appears in both inputs, only the pair from the **second** (newer) file is
//! emitted and both sides advance — the property that preserves recency when
//! the tree fuses an older segment with a newer one.

use crate::stream::{SegmentStream, DEFAULT_CHUNK_SIZE};
use crate::SegmentError;
use codec::Value;
use std::cmp::Ordering;
use std::path::Path;

/// One input with a single pair of lookahead.
///
/// The encoded key is cached alongside the decoded pair so each comparison is
/// a byte compare rather than a re-encode.
#[derive(Debug)]
struct MergeSide {
    stream: SegmentStream,
    peeked: Option<(Vec<u8>, Value, Value)>,
}

impl MergeSide {
    fn open(path: &Path, chunk_size: usize) -> Result<Self, SegmentError> {
        Ok(Self {
            stream: SegmentStream::with_chunk_size(path, chunk_size)?,
            peeked: None,
        })
    }

    /// Refills the lookahead slot from the stream if it is empty.
    fn fill_peek(&mut self) -> Result<(), SegmentError> {
        if self.peeked.is_none() {
            match self.stream.next() {
                Some(Ok((key, value))) => {
                    let key_bytes = codec::encode(&key);
                    self.peeked = Some((key_bytes, key, value));
                }
                Some(Err(e)) => return Err(e),
                None => {}
            }
        }
        Ok(())
    }

    fn take(&mut self) -> Option<(Value, Value)> {
        self.peeked.take().map(|(_, key, value)| (key, value))
    }
}

/// Which side supplies the next output pair.
enum Pick {
    Older,
    Newer,
    /// Equal keys: emit the newer pair, advance both.
    Both,
    Exhausted,
}

/// Iterator yielding the sorted merge of two segment files.
///
/// Both inputs must each be sorted ascending by encoded key (which every
/// flushed segment is). When one side runs out, the remainder of the other
/// passes through unchanged. Both file handles close on termination or drop.
#[derive(Debug)]
pub struct MergeStream {
    older: MergeSide,
    newer: MergeSide,
    done: bool,
}

impl MergeStream {
    /// Opens a merge of `older` and `newer` with the default chunk size.
    /// `newer` wins duplicate keys.
    pub fn open<P1, P2>(older: P1, newer: P2) -> Result<Self, SegmentError>
    where
        P1: AsRef<Path>,
        P2: AsRef<Path>,
    {
        Self::with_chunk_size(older, newer, DEFAULT_CHUNK_SIZE)
    }

    /// Opens a merge reading at most `chunk_size` bytes per I/O call.
    pub fn with_chunk_size<P1, P2>(
        older: P1,
        newer: P2,
        chunk_size: usize,
    ) -> Result<Self, SegmentError>
    where
        P1: AsRef<Path>,
        P2: AsRef<Path>,
    {
        Ok(Self {
            older: MergeSide::open(older.as_ref(), chunk_size)?,
            newer: MergeSide::open(newer.as_ref(), chunk_size)?,
            done: false,
        })
    }
}

impl Iterator for MergeStream {
    type Item = Result<(Value, Value), SegmentError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Err(e) = self.older.fill_peek() {
            self.done = true;
            return Some(Err(e));
        }
        if let Err(e) = self.newer.fill_peek() {
            self.done = true;
            return Some(Err(e));
        }

        let pick = match (&self.older.peeked, &self.newer.peeked) {
            (None, None) => Pick::Exhausted,
            (Some(_), None) => Pick::Older,
            (None, Some(_)) => Pick::Newer,
            (Some((a, _, _)), Some((b, _, _))) => match a.cmp(b) {
                Ordering::Less => Pick::Older,
                Ordering::Greater => Pick::Newer,
                Ordering::Equal => Pick::Both,
            },
        };

        match pick {
            Pick::Exhausted => {
                self.done = true;
                None
            }
            Pick::Older => self.older.take().map(Ok),
            Pick::Newer => self.newer.take().map(Ok),
            Pick::Both => {
                self.older.take();
                self.newer.take().map(Ok)
            }
        }
    }
}
