// Taint flow trace → highlight regions
//
// Hexagonal Architecture:
// - domain: Core types (TraceAnchor, HighlightRegion, SourceText)
// - infrastructure: Segment parsing, end-column resolution, the parse loop
// - ports: Report DTOs crossing the boundary (ParseReport, SkippedSegment)
// - application: File-backed use case (HighlightService)

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-export application layer (primary interface)
pub use application::{HighlightService, TraceLocation};

// Re-export domain types
pub use domain::{HighlightRegion, SegmentError, SourceText, TraceAnchor};

pub use infrastructure::{PositionResolver, TraceParser};
pub use ports::{ParseReport, SkipReason, SkippedSegment};
