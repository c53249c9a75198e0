use crate::SegmentError;
use codec::Value;
use std::fs;
use std::path::Path;

/// Frames a list of string pairs the way a flushed segment stores them.
pub fn frame_pairs(pairs: &[(&str, &str)]) -> Vec<u8> {
    let mut out = Vec::new();
    for (k, v) in pairs {
        out.extend_from_slice(&codec::encode(&Value::from(*k)));
        out.extend_from_slice(&codec::encode(&Value::from(*v)));
    }
    out
}

/// Writes a segment file holding `pairs` in the given order.
pub fn write_segment(path: &Path, pairs: &[(&str, &str)]) {
    fs::write(path, frame_pairs(pairs)).unwrap();
}

/// Drains a stream, panicking on the first error.
pub fn collect_pairs<I>(stream: I) -> Vec<(Value, Value)>
where
    I: Iterator<Item = Result<(Value, Value), SegmentError>>,
{
    stream.map(|r| r.unwrap()).collect()
}

/// The `(key, value)` list `pairs` as `Value` tuples.
pub fn as_values(pairs: &[(&str, &str)]) -> Vec<(Value, Value)> {
    pairs
        .iter()
        .map(|(k, v)| (Value::from(*k), Value::from(*v)))
        .collect()
}
