/*
 * Taint Highlight - Taint flow trace to editor highlight regions
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Location, Span)
 * - features/    : Vertical slices (taint_trace: parse → resolve → regions)
 * - config/      : YAML/env configuration (end policy, label prefix)
 *
 * The core is a pure function over already-read text. File access lives in
 * the application layer; process invocation and rendering live outside.
 */

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{EndPolicy, HighlightConfig};
pub use errors::{HighlightError, Result};
pub use features::taint_trace::{
    HighlightRegion, HighlightService, ParseReport, PositionResolver, SegmentError,
    SkipReason, SkippedSegment, SourceText, TraceAnchor, TraceLocation, TraceParser,
};
