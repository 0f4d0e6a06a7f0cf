//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::CanonicalPath;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use invpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { base: Some("../r;x".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref base) = config.base {
            Self::validate_base(base)?;
        }
        Ok(())
    }

    /// Check that `base` is a canonical path in its public form.
    fn validate_base(base: &str) -> Result<()> {
        if base.trim().is_empty() {
            return Err(Error::Validation {
                field: "base".into(),
                message: "Base path cannot be empty".into(),
            });
        }

        if !base.starts_with('/') {
            return Err(Error::Validation {
                field: "base".into(),
                message: format!("Base path '{base}' must be canonical (start with '/')"),
            });
        }

        base.parse::<CanonicalPath>()
            .map(|_| ())
            .map_err(|e| Error::Validation {
                field: "base".into(),
                message: e.to_string(),
            })
    }
}
