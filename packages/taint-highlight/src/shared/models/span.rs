//! Source location types
//!
//! `Location` is a 1-based point as written by the analysis tool.
//! `Span` is a 0-based, end-exclusive range on one line, as consumed by editors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Single 1-based location in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// 0-based span on a single line, end column exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub line: u32,
    pub start_col: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(line: u32, start_col: u32, end_col: u32) -> Self {
        Self {
            line,
            start_col,
            end_col,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_col >= self.end_col
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.line, self.start_col, self.end_col)
    }
}
