//! Domain types for taint flow traces

mod anchor;
mod errors;
mod region;
mod source;

pub use anchor::TraceAnchor;
pub use errors::SegmentError;
pub use region::HighlightRegion;
pub use source::SourceText;
