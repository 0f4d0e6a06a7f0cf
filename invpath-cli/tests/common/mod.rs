//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate the user configuration
//! - Config file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's settings into tests.
const ISOLATED_VARS: &[&str] = &[
    "INVPATH_CONFIG_DIR",
    "INVPATH_BASE",
    "INVPATH_OUTPUT_FORMAT",
    "INVPATH_KIND",
    "INVPATH_LOG_MODE",
];

/// Test environment with an isolated configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// User configuration directory passed via --config-dir
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The config directory is created empty, so no user config applies
    /// until [`write_user_config`](Self::write_user_config) is called.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("invpath-config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("invpath").expect("Failed to find invpath binary")
    }

    /// Get a command builder running inside the temp directory with the
    /// config directory set and `INVPATH_*` variables cleared.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `config.yaml` into the user config directory.
    pub fn write_user_config(&self, contents: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), contents)
            .expect("Failed to write user config");
    }

    /// Write `invpath.yaml` into the working directory.
    pub fn write_project_config(&self, contents: &str) {
        std::fs::write(self.temp_path.join("invpath.yaml"), contents)
            .expect("Failed to write project config");
    }

    /// Write an arbitrary file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command expected to succeed and return its stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run invpath");

        assert!(
            output.status.success(),
            "invpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
