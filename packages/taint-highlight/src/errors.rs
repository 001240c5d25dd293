//! Error types for taint-highlight
//!
//! Provides unified error handling across the crate. The parsing core never
//! returns these: malformed trace input degrades to a smaller result. They
//! cover file access and configuration in the application layer.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for taint-highlight operations
#[derive(Debug, Error)]
pub enum HighlightError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Annotated source file does not exist
    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Trace file does not exist (only raised when the caller asks for it)
    #[error("Taint flow file not found: {}", path.display())]
    TraceNotFound { path: PathBuf },
}

impl HighlightError {
    /// Create a source-not-found error
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        HighlightError::SourceNotFound { path: path.into() }
    }

    /// Create a trace-not-found error
    pub fn trace_not_found(path: impl Into<PathBuf>) -> Self {
        HighlightError::TraceNotFound { path: path.into() }
    }
}

/// Result type alias for taint-highlight operations
pub type Result<T> = std::result::Result<T, HighlightError>;
