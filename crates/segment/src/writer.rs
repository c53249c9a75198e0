//! Writes framed `(key, value)` pairs to a segment file.
//!
//! The write is create + write + sync: contents go through a `BufWriter`,
//! then `flush` and `sync_all` before the call returns, so a sealed segment
//! is durable once the writer reports success.

use crate::{MergeStream, SegmentError};
use memtable::Memtable;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes segment files. Stateless — all work happens inside the two static
/// entry points.
pub struct SegmentWriter {}

impl SegmentWriter {
    /// Flush entry point: writes a memtable's pairs to `path`.
    ///
    /// The memtable already holds encoded frames in ascending key order, so
    /// the file contents are the plain concatenation of its entries.
    pub fn write_memtable(path: &Path, mem: &Memtable) -> Result<(), SegmentError> {
        Self::write_with(path, |file| {
            for (key, value) in mem.iter() {
                file.write_all(key)?;
                file.write_all(value)?;
            }
            Ok(())
        })
    }

    /// Merge entry point: drains a [`MergeStream`] into `path`, framing each
    /// pair straight into the output buffer.
    pub fn write_merge(path: &Path, merged: MergeStream) -> Result<(), SegmentError> {
        Self::write_with(path, |file| {
            for pair in merged {
                let (key, value) = pair?;
                codec::encode_into(file, &key)?;
                codec::encode_into(file, &value)?;
            }
            Ok(())
        })
    }

    /// Shared create + write + sync skeleton.
    fn write_with<F>(path: &Path, body: F) -> Result<(), SegmentError>
    where
        F: FnOnce(&mut BufWriter<File>) -> Result<(), SegmentError>,
    {
        let raw = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        let mut file = BufWriter::new(raw);

        body(&mut file)?;

        file.flush()?;
        file.into_inner()
            .map_err(|e| SegmentError::Io(e.into_error()))?
            .sync_all()?;
        Ok(())
    }
}
