//! Trace segment splitting and anchor extraction
//!
//! Trace format:
//! ```text
//! { ln: 12 cl: 5 fl: src/main.c } --> { ln: 14 cl: 9 fl: src/main.c }
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::features::taint_trace::domain::{SegmentError, TraceAnchor};

/// Literal separator between trace segments
pub const SEGMENT_DELIMITER: &str = "-->";

/// `{ ln: <int> cl: <int> fl: <label> }`, label runs to the closing brace and
/// must not be blank
static SEGMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{ ln:\s+([0-9]+)\s+cl:\s+([0-9]+)\s+fl:\s+([^}\s][^}]*?)\s*\}$")
        .expect("segment pattern is a valid regex")
});

/// Split trace text into trimmed segments, keeping their positions.
///
/// Empty segments (leading/trailing/doubled delimiters) are dropped here;
/// they carry no information and are not diagnostics.
pub fn split_segments(trace_text: &str) -> impl Iterator<Item = (usize, &str)> {
    trace_text
        .split(SEGMENT_DELIMITER)
        .map(str::trim)
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
}

/// Well-formed means brace-enclosed after trimming
pub fn is_bracketed(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

/// Parse one trimmed segment into an anchor
pub fn parse_segment(segment: &str) -> Result<TraceAnchor, SegmentError> {
    if !is_bracketed(segment) {
        return Err(SegmentError::NotBracketed);
    }

    let caps = SEGMENT_PATTERN
        .captures(segment)
        .ok_or(SegmentError::PatternMismatch)?;

    let line = parse_position("ln", &caps[1])?;
    let column = parse_position("cl", &caps[2])?;

    TraceAnchor::new(line, column, &caps[3])
}

fn parse_position(field: &'static str, digits: &str) -> Result<u32, SegmentError> {
    digits.parse().map_err(|_| SegmentError::InvalidNumber {
        field,
        value: digits.to_string(),
    })
}
