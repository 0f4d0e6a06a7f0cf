//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use invpath::config::{Config, ConfigMerger};
///
/// let low = Config { base: Some("/t;low".to_string()), ..Default::default() };
/// let high = Config { base: Some("/t;high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.base, Some("/t;high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Each field of `source` that is `Some` replaces the target's value.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.base.is_some() {
            target.base.clone_from(&source.base);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }

        if source.kind.is_some() {
            target.kind = source.kind;
        }
    }
}
