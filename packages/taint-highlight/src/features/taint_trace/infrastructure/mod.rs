//! Taint trace infrastructure
//!
//! - segment: `-->` splitting and `{ ln cl fl }` extraction
//! - position_resolver: end-column policies
//! - trace_parser: the skip-and-continue parse loop

pub mod position_resolver;
pub mod segment;
pub mod trace_parser;

pub use position_resolver::PositionResolver;
pub use segment::{is_bracketed, parse_segment, split_segments, SEGMENT_DELIMITER};
pub use trace_parser::TraceParser;
