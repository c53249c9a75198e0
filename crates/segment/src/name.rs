//! Segment filename grammar: `segment-<n>.data` where `n` is a positive
//! decimal integer. Ids are assigned at flush time; id 1 is the first.

use crate::SegmentError;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Leading part of every segment filename.
pub const SEGMENT_PREFIX: &str = "segment-";
/// Trailing part of every segment filename.
pub const SEGMENT_SUFFIX: &str = ".data";

/// Returns the filename for segment `n`: `segment-<n>.data`.
#[must_use]
pub fn filename(n: u64) -> String {
    format!("{}{}{}", SEGMENT_PREFIX, n, SEGMENT_SUFFIX)
}

/// Returns the full path of segment `n` inside `dir`.
#[must_use]
pub fn path(dir: &Path, n: u64) -> PathBuf {
    dir.join(filename(n))
}

/// Parses the segment id out of a filename.
///
/// Rejects anything that is not `segment-<positive decimal integer>.data`
/// with [`SegmentError::InvalidFilename`]. Signs, empty digit runs, and id 0
/// are all invalid.
pub fn num(name: &str) -> Result<u64, SegmentError> {
    let invalid = || SegmentError::InvalidFilename(name.to_string());

    let digits = name
        .strip_prefix(SEGMENT_PREFIX)
        .and_then(|rest| rest.strip_suffix(SEGMENT_SUFFIX))
        .ok_or_else(invalid)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let n: u64 = digits.parse().map_err(|_| invalid())?;
    if n == 0 {
        return Err(invalid());
    }
    Ok(n)
}

/// Total predicate: `true` iff `name` matches the segment grammar.
#[must_use]
pub fn is_segment_file(name: &str) -> bool {
    num(name).is_ok()
}

/// Creates segment `n`'s file inside `dir` if it does not exist (leaving an
/// existing file untouched) and returns its path.
pub fn ensure_exists(dir: &Path, n: u64) -> Result<PathBuf, SegmentError> {
    let p = path(dir, n);
    OpenOptions::new().create(true).append(true).open(&p)?;
    Ok(p)
}
