/*
 * Taint Trace Ports
 *
 * DTOs handed to callers: the regions to render plus, on request, the
 * segments that were dropped and why. Skips are diagnostics, never errors.
 */

use std::fmt;
use std::fmt::Write as _;

use serde::Serialize;
use serde_json::Value;

use super::domain::{HighlightRegion, SegmentError};

/// Why a segment produced no region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Segment text could not be parsed into an anchor
    Malformed(SegmentError),

    /// Anchor points past the last line of the supplied source
    LineOutOfRange { line: u32, available: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "{}", err),
            Self::LineOutOfRange { line, available } => write!(
                f,
                "line {} is outside the source ({} lines)",
                line, available
            ),
        }
    }
}

/// A segment that was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSegment {
    /// Position of the segment in the `-->`-separated trace (0-based)
    pub index: usize,

    /// Trimmed segment text
    pub text: String,

    pub reason: SkipReason,
}

/// Result of one parse call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Regions in trace order
    pub regions: Vec<HighlightRegion>,

    /// Dropped segments in trace order
    pub skipped: Vec<SkippedSegment>,
}

impl ParseReport {
    /// True when every non-empty segment became a region
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn into_regions(self) -> Vec<HighlightRegion> {
        self.regions
    }

    /// One `line:start-end<TAB>label` line per region
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for region in &self.regions {
            let _ = writeln!(out, "{}\t{}", region.span(), region.label());
        }
        out
    }

    /// One line per skipped segment, for stderr
    pub fn render_skipped(&self) -> String {
        let mut out = String::new();
        for skipped in &self.skipped {
            let _ = writeln!(
                out,
                "skipped segment #{}: {} ({})",
                skipped.index, skipped.reason, skipped.text
            );
        }
        out
    }

    /// JSON form: `{ regions, skipped }` with skips, the bare region array without
    pub fn to_json(&self, with_skipped: bool) -> serde_json::Result<Value> {
        if with_skipped {
            serde_json::to_value(self)
        } else {
            serde_json::to_value(&self.regions)
        }
    }
}
