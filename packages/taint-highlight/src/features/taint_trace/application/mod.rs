/*
 * Taint Trace Application Layer
 *
 * Use Cases:
 * 1. HighlightService - read source + trace from disk, return regions
 */

pub mod highlight_service;

pub use highlight_service::{HighlightService, TraceLocation};
