//! Highlight configuration
//!
//! Selects how a highlighted span is closed and how its hover label reads.
//!
//! Two end policies exist because the analysis tool's front ends disagree:
//! one stops at the next word boundary, the other runs to the end of the line.
//! Neither is implied, so callers pick one (default: `NextBoundary`).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SUPPORTED_VERSIONS};
use super::validation::{validated, Validatable};

/// Env var selecting the end policy
pub const ENV_POLICY: &str = "TAINT_HIGHLIGHT_POLICY";

/// Env var overriding the hover label prefix
pub const ENV_LABEL_PREFIX: &str = "TAINT_HIGHLIGHT_LABEL_PREFIX";

/// How the end column of a highlighted span is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndPolicy {
    /// Stop at the first space or newline at or after the start column
    #[default]
    NextBoundary,
    /// Always run to the end of the line
    LineEnd,
}

impl EndPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NextBoundary => "next_boundary",
            Self::LineEnd => "line_end",
        }
    }
}

impl FromStr for EndPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "next_boundary" | "boundary" => Ok(Self::NextBoundary),
            "line_end" | "line" => Ok(Self::LineEnd),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for EndPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highlight settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    /// Span end policy
    pub end_policy: EndPolicy,

    /// Hover label prefix, rendered as `"{prefix}: {file}:{line}:{column}"`
    pub label_prefix: String,

    /// Name of the project-level trace file looked up beside the source
    pub trace_file_name: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            end_policy: EndPolicy::default(),
            label_prefix: "Tainted Path Segment".to_string(),
            trace_file_name: "taint.txt".to_string(),
        }
    }
}

impl HighlightConfig {
    /// Builder: Set end_policy
    pub fn end_policy(mut self, policy: EndPolicy) -> Self {
        self.end_policy = policy;
        self
    }

    /// Builder: Set label_prefix
    pub fn label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    /// Builder: Set trace_file_name
    pub fn trace_file_name(mut self, name: impl Into<String>) -> Self {
        self.trace_file_name = name.into();
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.label_prefix.trim().is_empty() {
            return Err(ConfigError::validation(
                "label_prefix",
                "must not be empty",
            ));
        }

        let name = self.trace_file_name.as_str();
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(ConfigError::validation(
                "trace_file_name",
                format!("'{name}' must be a bare file name"),
            ));
        }

        Ok(())
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Load from a YAML string (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        validated(export.highlight.unwrap_or_default())
    }

    /// Export to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            highlight: Some(self.clone()),
        };
        Ok(serde_yaml::to_string(&export)?)
    }

    /// Apply `TAINT_HIGHLIGHT_*` environment overrides
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (env-shaped keys)
    pub fn with_overrides_from<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup(ENV_POLICY) {
            self.end_policy = policy.parse()?;
        }
        if let Some(prefix) = lookup(ENV_LABEL_PREFIX) {
            self.label_prefix = prefix;
        }
        validated(self)
    }
}

impl Validatable for HighlightConfig {
    fn validate(&self) -> ConfigResult<()> {
        HighlightConfig::validate(self)
    }
}
