//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading invpath configuration files
//! from the user and project locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the user configuration inside the config directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// File name of a project configuration.
pub const PROJECT_CONFIG_FILE: &str = "invpath.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use invpath::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.invpath/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// assert_eq!(user_config.precedence, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use invpath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.invpath/config.yaml` (precedence 1)
    /// 2. The nearest `invpath.yaml`, walking up from `working_dir`
    ///    (precedence 2)
    ///
    /// `config_dir` replaces `~/.invpath` as the user config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match Self::default_config_dir() {
                Some(dir) => dir.join(USER_CONFIG_FILE),
                None => {
                    log::debug!("no home directory; skipping user config");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest project configuration by walking up directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.exists() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Returns `~/.invpath`, if the home directory is known.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".invpath"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "base: /t;acme\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.base, Some("/t;acme".to_string()));
    }

    #[test]
    fn test_discover_no_config() {
        let temp_dir = TempDir::new().unwrap();
        let found = ConfigLoader::discover_project_config(temp_dir.path()).unwrap();
        // a stray invpath.yaml above the temp dir would be found here
        if let Some(source) = found {
            assert!(!source.path.starts_with(temp_dir.path()));
        }
    }

    #[test]
    fn test_discover_from_child_finds_parent() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&child).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "kind: relative\n").unwrap();

        let source = ConfigLoader::discover_project_config(&child)
            .unwrap()
            .unwrap();
        assert_eq!(source.precedence, 2);
        assert_eq!(source.path, temp_dir.path().join(PROJECT_CONFIG_FILE));
    }

    #[test]
    fn test_discover_prefers_nearest() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child");
        fs::create_dir(&child).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "base: /t;outer\n").unwrap();
        fs::write(child.join(PROJECT_CONFIG_FILE), "base: /t;inner\n").unwrap();

        let source = ConfigLoader::discover_project_config(&child)
            .unwrap()
            .unwrap();
        assert_eq!(source.config.base, Some("/t;inner".to_string()));
    }

    #[test]
    fn test_load_all_with_config_dir() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(user.path().join(USER_CONFIG_FILE), "output_format: json\n").unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "base: /t;p\n").unwrap();

        let sources = ConfigLoader::load_all(project.path(), Some(user.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].precedence, 2);
    }
}
