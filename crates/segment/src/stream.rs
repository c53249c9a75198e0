//! Lazy chunked reader over a file of framed `(key, value)` pairs.
//!
//! The reader pulls `chunk_size` bytes at a time, prepends whatever tail the
//! decoder left undecoded on the previous chunk, and hands the combined
//! buffer to [`codec::decode_many`]. Consecutive decoded terms are paired
//! `(key, value)` in file order.
//!
//! The stream owns its file handle. The handle is released as soon as the
//! file is exhausted or an error surfaces, and otherwise when the iterator is
//! dropped, so abandoning a stream mid-way cannot leak a descriptor.

use crate::SegmentError;
use codec::Value;
use std::collections::VecDeque;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Default read granularity in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Iterator of `Result<(Value, Value), SegmentError>` over one file.
#[derive(Debug)]
pub struct SegmentStream {
    path: PathBuf,
    /// `None` once the file is exhausted or the stream failed.
    file: Option<File>,
    /// Reusable read buffer, `chunk_size` bytes.
    chunk: Vec<u8>,
    /// Bytes of a trailing partial frame, carried into the next chunk.
    tail: Vec<u8>,
    /// Decoded terms awaiting pairing.
    terms: VecDeque<Value>,
    done: bool,
}

impl SegmentStream {
    /// Opens `path` with the default chunk size.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SegmentError> {
        Self::with_chunk_size(path, DEFAULT_CHUNK_SIZE)
    }

    /// Opens `path`, reading at most `chunk_size` bytes per I/O call.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is 0.
    pub fn with_chunk_size<P: AsRef<Path>>(
        path: P,
        chunk_size: usize,
    ) -> Result<Self, SegmentError> {
        assert!(chunk_size > 0, "chunk_size must be > 0");
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        Ok(Self {
            path,
            file: Some(file),
            chunk: vec![0u8; chunk_size],
            tail: Vec::new(),
            terms: VecDeque::new(),
            done: false,
        })
    }

    /// Reads chunks until a full `(key, value)` pair is buffered or EOF.
    fn fill(&mut self) -> Result<(), SegmentError> {
        while self.terms.len() < 2 {
            let Some(file) = self.file.as_mut() else {
                break;
            };
            let n = file.read(&mut self.chunk)?;
            if n == 0 {
                // EOF: release the handle eagerly.
                self.file = None;
                break;
            }

            self.tail.extend_from_slice(&self.chunk[..n]);
            let buf = std::mem::take(&mut self.tail);
            match codec::decode_many(&buf) {
                Ok((values, rest)) => {
                    self.tail = rest.to_vec();
                    self.terms.extend(values);
                }
                Err(source) => {
                    self.file = None;
                    return Err(SegmentError::Stream {
                        path: self.path.clone(),
                        source,
                    });
                }
            }
        }
        Ok(())
    }

    fn incomplete(&self) -> SegmentError {
        SegmentError::Incomplete {
            path: self.path.clone(),
        }
    }
}

impl Iterator for SegmentStream {
    type Item = Result<(Value, Value), SegmentError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Err(e) = self.fill() {
            self.done = true;
            return Some(Err(e));
        }

        match (self.terms.pop_front(), self.terms.pop_front()) {
            (Some(key), Some(value)) => Some(Ok((key, value))),
            // EOF with an odd number of terms decoded overall.
            (Some(_), None) => {
                self.done = true;
                Some(Err(self.incomplete()))
            }
            (None, _) => {
                self.done = true;
                if self.tail.is_empty() {
                    None
                } else {
                    // EOF inside a frame: a truncated write, not a clean end.
                    Some(Err(self.incomplete()))
                }
            }
        }
    }
}
