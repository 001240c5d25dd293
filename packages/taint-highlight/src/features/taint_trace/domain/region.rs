//! Highlight region - one renderable decoration span

use serde::Serialize;

use super::anchor::TraceAnchor;
use crate::shared::models::Span;

/// A 0-based, single-line, end-exclusive span with a hover label.
///
/// `column_end >= column_start` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HighlightRegion {
    line: u32,
    column_start: u32,
    column_end: u32,
    label: String,
}

impl HighlightRegion {
    /// Close an anchor into a region ending at `column_end` (0-based).
    ///
    /// When the anchor's column lies past `column_end` (start beyond the end
    /// of the line) the start is pulled back to `column_end`, leaving an empty
    /// span. The label always carries the anchor's original values.
    pub fn from_anchor(anchor: &TraceAnchor, column_end: u32, label_prefix: &str) -> Self {
        let (line, column) = anchor.zero_based();
        Self {
            line,
            column_start: column.min(column_end),
            column_end,
            label: format!("{}: {}:{}", label_prefix, anchor.file(), anchor.location()),
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column_start(&self) -> u32 {
        self.column_start
    }

    pub fn column_end(&self) -> u32 {
        self.column_end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn span(&self) -> Span {
        Span::new(self.line, self.column_start, self.column_end)
    }
}
