//! Configuration validation

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use taint_highlight::config::validation::Validatable;
///
/// fn load<C: Validatable>(config: C) -> ConfigResult<C> {
///     config.validate()?;
///     Ok(config)
/// }
/// ```
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;
}

/// Validate and hand the config back, for use at the end of loaders.
pub fn validated<C: Validatable>(config: C) -> ConfigResult<C> {
    config.validate()?;
    Ok(config)
}
