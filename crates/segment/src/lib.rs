//! # Segment — immutable sorted runs on disk
//!
//! When the in-memory [`memtable::Memtable`] exceeds its size threshold the
//! tree flushes it to disk as a segment. Segments are *write-once, read-many*
//! — once created they are never modified, only deleted by a merge.
//!
//! ## File layout
//!
//! A segment is nothing but a concatenation of codec frames, paired
//! `(key, value) (key, value) …`, keys ascending by encoded bytes, with no
//! header, index, or trailing padding:
//!
//! ```text
//! s\x00\x00\x00\x05hello s\x00\x00\x00\x05world    (spaces for clarity)
//! ```
//!
//! The write-ahead log shares this layout (in insertion order rather than key
//! order), which is why recovery replays it with the same stream reader.
//!
//! ## Module responsibilities
//!
//! | Module     | Purpose                                                  |
//! |------------|----------------------------------------------------------|
//! | [`name`]   | `segment-<n>.data` filename grammar and path helpers     |
//! | [`writer`] | create + write + sync of framed pairs                    |
//! | [`stream`] | lazy chunked reader with partial-frame resumption        |
//! | [`merge`]  | two-way sorted merge, newer side wins duplicate keys     |

mod merge;
mod name;
mod stream;
mod writer;

pub use merge::MergeStream;
pub use name::{
    ensure_exists, filename, is_segment_file, num, path, SEGMENT_PREFIX, SEGMENT_SUFFIX,
};
pub use stream::{SegmentStream, DEFAULT_CHUNK_SIZE};
pub use writer::SegmentWriter;

use codec::CodecError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from segment naming, reading, and writing.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// A filename does not match `segment-<positive integer>.data`.
    #[error("invalid segment filename: {0:?}")]
    InvalidFilename(String),

    /// The decoder rejected the file's contents.
    #[error("{}: decode failed: {source}", .path.display())]
    Stream {
        /// File being streamed when the decode failed.
        path: PathBuf,
        /// The underlying codec error.
        source: CodecError,
    },

    /// The file ended with an unpaired term or a truncated frame, e.g. after
    /// a crash mid-flush.
    #[error("{}: file ends with an unpaired or truncated frame", .path.display())]
    Incomplete {
        /// The incomplete file.
        path: PathBuf,
    },

    /// An underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests;
