//! Caller-driven segment merge.
//!
//! Fuses an older segment with a newer one into a single sorted run that
//! keeps the newer value on key collisions. The merged segment inherits the
//! **older** id, which preserves recency: everything still older than it
//! remains older, and the newer id simply disappears.

use segment::{MergeStream, SegmentWriter};
use std::fs;
use std::path::PathBuf;

use crate::{Tree, TreeError};

impl Tree {
    /// Merges segment `older` with segment `newer` (`older < newer`).
    ///
    /// The merged run is first written to a temp file next to the older
    /// segment, then both inputs are removed and the temp renamed onto the
    /// older segment's path. The bloom is untouched — the union of keys does
    /// not change.
    ///
    /// # Errors
    ///
    /// [`TreeError::SelfMerge`] when `older == newer`,
    /// [`TreeError::OutOfOrderMerge`] when `older > newer`, otherwise any
    /// segment read/write failure.
    pub fn merge(&mut self, older: u64, newer: u64) -> Result<(), TreeError> {
        if older == newer {
            return Err(TreeError::SelfMerge(older));
        }
        if older > newer {
            return Err(TreeError::OutOfOrderMerge(older, newer));
        }

        let older_path = segment::path(&self.dir, older);
        let newer_path = segment::path(&self.dir, newer);

        let mut temp = older_path.clone().into_os_string();
        temp.push("temp");
        let temp = PathBuf::from(temp);

        let merged = MergeStream::open(&older_path, &newer_path)?;
        SegmentWriter::write_merge(&temp, merged)?;

        fs::remove_file(&newer_path)?;
        fs::remove_file(&older_path)?;
        fs::rename(&temp, &older_path)?;

        self.segments.retain(|&id| id != newer);
        Ok(())
    }
}
