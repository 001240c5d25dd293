//! Trace anchor - one point of a taint flow trace

use serde::Serialize;

use super::errors::SegmentError;
use crate::shared::models::Location;

/// One `{ ln cl fl }` point of a taint flow trace.
///
/// Line and column are 1-based, exactly as the analysis tool wrote them.
/// The file label is opaque and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TraceAnchor {
    line: u32,
    column: u32,
    file: String,
}

impl TraceAnchor {
    /// Create an anchor, rejecting positions that are not 1-based
    pub fn new(line: u32, column: u32, file: impl Into<String>) -> Result<Self, SegmentError> {
        if line == 0 {
            return Err(SegmentError::ZeroPosition { field: "ln" });
        }
        if column == 0 {
            return Err(SegmentError::ZeroPosition { field: "cl" });
        }
        Ok(Self {
            line,
            column,
            file: file.into(),
        })
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// 0-based (line, column) of the anchor
    pub fn zero_based(&self) -> (u32, u32) {
        (self.line - 1, self.column - 1)
    }

    /// 0-based index of the anchored line in the source text
    pub fn line_index(&self) -> usize {
        self.zero_based().0 as usize
    }
}
