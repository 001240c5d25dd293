//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema types. Loading and export live in
//! `highlight_config.rs`.

use serde::{Deserialize, Serialize};

use super::highlight_config::HighlightConfig;

/// Schema version understood by this build
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1). Optional so a missing field
    /// surfaces as `ConfigError::MissingVersion` instead of a serde error.
    #[serde(default)]
    pub version: Option<u32>,

    /// Highlight settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightConfig>,
}
