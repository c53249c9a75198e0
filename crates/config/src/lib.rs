//! # Config
//!
//! Tuning knobs for the silt storage tree.
//!
//! The only knob the core exposes today is the memtable flush threshold.
//! Options are plain values with builder-style setters so call sites read as
//! `Options::new().threshold(24)`.

/// Default memtable flush threshold in bytes (1 MB-ish, decimal).
///
/// When the memtable's byte size estimate exceeds this value after a `put`,
/// the tree seals the memtable into a new on-disk segment.
pub const DEFAULT_THRESHOLD: usize = 1_000_000;

/// Options accepted by `Tree::open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Memtable byte-size threshold that triggers a flush.
    pub threshold: usize,
}

impl Options {
    /// Creates options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Sets the flush threshold in bytes.
    #[must_use]
    pub fn threshold(mut self, bytes: usize) -> Self {
        self.threshold = bytes;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
