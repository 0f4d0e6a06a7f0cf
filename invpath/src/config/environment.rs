//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `INVPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use crate::output::OutputFormat;
use crate::path::PathKind;
use clap::ValueEnum;
use std::env;

/// Overrides [`Config::base`].
pub const BASE_ENV: &str = "INVPATH_BASE";
/// Overrides [`Config::output_format`].
pub const OUTPUT_FORMAT_ENV: &str = "INVPATH_OUTPUT_FORMAT";
/// Overrides [`Config::kind`].
pub const KIND_ENV: &str = "INVPATH_KIND";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use invpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `INVPATH_BASE`, `INVPATH_OUTPUT_FORMAT`, `INVPATH_LOG_MODE` and
    /// `INVPATH_KIND`. Unset variables leave the config untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unrecognized value. The base
    /// path itself is checked later by the validator.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(base) = env::var(BASE_ENV) {
            config.base = Some(base);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_enum::<OutputFormat>(OUTPUT_FORMAT_ENV, &val)?);
        }

        if let Ok(val) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?);
        }

        if let Ok(val) = env::var(KIND_ENV) {
            config.kind = Some(Self::parse_enum::<PathKind>(KIND_ENV, &val)?);
        }

        Ok(())
    }

    fn parse_enum<T: ValueEnum>(field: &str, s: &str) -> Result<T> {
        T::from_str(s.trim(), true).map_err(|_| {
            let expected: Vec<String> = T::value_variants()
                .iter()
                .filter_map(|v| v.to_possible_value())
                .map(|v| v.get_name().to_string())
                .collect();
            Error::Validation {
                field: field.into(),
                message: format!("Invalid value '{s}' (expected one of {})", expected.join(", ")),
            }
        })
    }
}
