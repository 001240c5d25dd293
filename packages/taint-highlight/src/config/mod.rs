//! Configuration system
//!
//! Two levels:
//! - Builder: `HighlightConfig::default().end_policy(EndPolicy::LineEnd)`
//! - YAML v1 file, optionally followed by `TAINT_HIGHLIGHT_*` env overrides
//!
//! # Examples
//!
//! ```rust,ignore
//! use taint_highlight::config::{EndPolicy, HighlightConfig};
//!
//! let config = HighlightConfig::default().end_policy(EndPolicy::LineEnd);
//!
//! let config = HighlightConfig::from_yaml("highlight.yaml")?.with_env_overrides()?;
//! ```

pub mod error;
pub mod highlight_config;
pub mod io;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use highlight_config::{EndPolicy, HighlightConfig, ENV_LABEL_PREFIX, ENV_POLICY};
pub use io::ConfigExportV1;
pub use validation::Validatable;
