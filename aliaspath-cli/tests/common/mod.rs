//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with a temporary working directory
//! - Command builders that isolate tests from `ALIASPATH_*` variables
//! - Configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Root passed with `--root` by [`TestEnv::command`].
#[allow(dead_code)]
pub const TEST_ROOT: &str = "/srv/app";

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command running in the temp directory, without `--root`.
    ///
    /// Environment variables that would change the outcome are cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("aliaspath").expect("Failed to find aliaspath binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("ALIASPATH_ROOT")
            .env_remove("ALIASPATH_CONFIG")
            .env_remove("ALIASPATH_LOG_MODE")
            .env_remove("ALIASPATH_OUTPUT_FORMAT");
        cmd
    }

    /// Get a command with `--root` set to [`TEST_ROOT`].
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--root").arg(TEST_ROOT);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write `aliaspath.yaml` in the temp directory.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write_file("aliaspath.yaml", contents)
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run aliaspath");
        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
