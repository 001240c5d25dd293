//! Highlight Service - file-backed use case
//!
//! Reads the annotated source and its taint flow trace from disk, then hands
//! both to the pure `TraceParser`. Running the compiler or the analysis
//! binary that writes the trace is the caller's job.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use taint_highlight::{HighlightConfig, HighlightService, TraceLocation};
//!
//! let service = HighlightService::new(HighlightConfig::default())?;
//! let regions = service.highlight_file("src/vuln.c", &TraceLocation::ProjectTrace)?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::{ConfigResult, HighlightConfig};
use crate::errors::{HighlightError, Result};
use crate::features::taint_trace::domain::{HighlightRegion, SourceText};
use crate::features::taint_trace::infrastructure::TraceParser;
use crate::features::taint_trace::ports::ParseReport;

/// Where the trace for a source file lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceLocation {
    /// `<source dir>/<trace_file_name>`, written by a whole-project analysis run
    ProjectTrace,

    /// `<source path without extension>.txt`, a per-file trace
    SiblingTrace,

    /// Caller-supplied path
    Explicit(PathBuf),
}

/// Produces highlight regions for source files on disk
#[derive(Debug, Clone)]
pub struct HighlightService {
    config: HighlightConfig,
    parser: TraceParser,
    require_trace: bool,
}

impl HighlightService {
    /// Create a service from a config, validating it first
    pub fn new(config: HighlightConfig) -> ConfigResult<Self> {
        config.validate()?;
        let parser = TraceParser::new(&config);
        Ok(Self {
            config,
            parser,
            require_trace: false,
        })
    }

    /// When set, a missing trace file is an error instead of an empty result
    pub fn require_trace(mut self, require: bool) -> Self {
        self.require_trace = require;
        self
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn parser(&self) -> &TraceParser {
        &self.parser
    }

    /// Path of the trace file for `source_path`
    pub fn locate_trace(&self, source_path: &Path, location: &TraceLocation) -> PathBuf {
        match location {
            TraceLocation::ProjectTrace => source_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(&self.config.trace_file_name),
            TraceLocation::SiblingTrace => source_path.with_extension("txt"),
            TraceLocation::Explicit(path) => path.clone(),
        }
    }

    /// Regions for a source file on disk
    pub fn highlight_file(
        &self,
        source_path: impl AsRef<Path>,
        location: &TraceLocation,
    ) -> Result<Vec<HighlightRegion>> {
        Ok(self
            .highlight_file_with_report(source_path, location)?
            .into_regions())
    }

    /// Regions plus skipped-segment diagnostics for a source file on disk
    pub fn highlight_file_with_report(
        &self,
        source_path: impl AsRef<Path>,
        location: &TraceLocation,
    ) -> Result<ParseReport> {
        let source_path = source_path.as_ref();
        if !source_path.is_file() {
            return Err(HighlightError::source_not_found(source_path));
        }

        let trace_path = self.locate_trace(source_path, location);
        if !trace_path.is_file() {
            if self.require_trace {
                return Err(HighlightError::trace_not_found(trace_path));
            }
            warn!("Taint flow file not found: {}", trace_path.display());
            return Ok(ParseReport::default());
        }

        let source_text = fs::read_to_string(source_path)?;
        let trace_text = fs::read_to_string(&trace_path)?;

        let report = self.highlight_text(&trace_text, &source_text);
        info!(
            "Highlighted {} with {}: {} regions, {} skipped",
            source_path.display(),
            trace_path.display(),
            report.regions.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Regions for text the caller already read
    pub fn highlight_text(&self, trace_text: &str, source_text: &str) -> ParseReport {
        self.parser
            .parse_source_with_report(trace_text, &SourceText::new(source_text))
    }
}
