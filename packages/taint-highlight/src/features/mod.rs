//! Feature modules
//!
//! Each feature is a vertical slice (domain → infrastructure → application).

pub mod taint_trace;
