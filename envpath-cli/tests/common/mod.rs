//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - A temporary tree with directories, a file, and a missing path
//! - Command builders that pin `PATH` and logging to known values

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Platform list separator, as the binary uses it.
#[cfg(windows)]
pub const SEP: &str = ";";
/// Platform list separator, as the binary uses it.
#[cfg(not(windows))]
pub const SEP: &str = ":";

/// Test environment with a controlled set of path entries.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// An existing directory
    pub bin: PathBuf,
    /// A second existing directory
    pub local_bin: PathBuf,
    /// A regular file
    pub file: PathBuf,
    /// A path that does not exist
    pub missing: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path();
        let bin = root.join("usr").join("bin");
        let local_bin = root.join("usr").join("local").join("bin");
        let file = root.join("plain-file");
        let missing = root.join("nonexistent");

        std::fs::create_dir_all(&bin).expect("Failed to create test directory");
        std::fs::create_dir_all(&local_bin).expect("Failed to create test directory");
        std::fs::write(&file, b"not a directory").expect("Failed to create test file");

        Self {
            temp_dir,
            bin,
            local_bin,
            file,
            missing,
        }
    }

    /// Get a bare command builder without a pinned PATH.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("envpath").expect("Failed to find envpath binary");
        cmd.env_remove("ENVPATH_LOG_MODE").env_remove("ENVPATH_VAR");
        cmd
    }

    /// Get a command builder whose PATH is `value`.
    pub fn command_with_path(&self, value: &str) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("PATH", value);
        cmd
    }

    /// Get a command builder whose PATH is the standard three-entry scenario:
    /// `bin`, `missing`, `local_bin`.
    pub fn command(&self) -> Command {
        self.command_with_path(&self.scenario_path())
    }

    /// Same as [`TestEnv::command`], but as a `std::process::Command` so a
    /// custom stdin handle can be attached.
    pub fn std_command(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("envpath"));
        cmd.env_remove("ENVPATH_LOG_MODE")
            .env_remove("ENVPATH_VAR")
            .env("PATH", self.scenario_path());
        cmd
    }

    pub fn scenario_path(&self) -> String {
        join(&[&self.bin, &self.missing, &self.local_bin])
    }

    /// The value the scenario cleans to.
    pub fn scenario_cleaned(&self) -> String {
        join(&[&self.bin, &self.local_bin])
    }

    /// Run with the scenario PATH and return stdout.
    pub fn stdout_of(&self, args: &[&str], stdin: &str) -> String {
        let output = self
            .command()
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("Failed to run envpath");

        assert!(
            output.status.success(),
            "envpath failed: {}",
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

/// Join paths with the platform separator.
pub fn join<P: AsRef<Path>>(paths: &[P]) -> String {
    paths
        .iter()
        .map(|p| display(p.as_ref()))
        .collect::<Vec<_>>()
        .join(SEP)
}

/// A path as the binary prints it.
pub fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
