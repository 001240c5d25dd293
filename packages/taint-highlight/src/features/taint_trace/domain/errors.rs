//! Per-segment parse errors
//!
//! These never escape the parser: a failing segment is skipped and, when a
//! report is requested, recorded as a `SkippedSegment`.

use serde::Serialize;
use thiserror::Error;

/// Why a single trace segment could not become an anchor
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentError {
    /// Segment does not start with `{` and end with `}`
    #[error("segment is not enclosed in braces")]
    NotBracketed,

    /// Braces present but the body is not `{ ln: <int> cl: <int> fl: <file> }`
    #[error("segment does not match `{{ ln: <int> cl: <int> fl: <file> }}`")]
    PatternMismatch,

    /// A position field does not fit a 32-bit line/column
    #[error("field '{field}' has out-of-range value '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// A position field is zero (positions are 1-based)
    #[error("field '{field}' must be 1-based, got 0")]
    ZeroPosition { field: &'static str },
}
