//! Shared helpers for envpath integration tests.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use envpath::LIST_SEPARATOR;
use tempfile::TempDir;

/// RAII guard for setting and restoring an environment variable.
///
/// Tests using this must be marked `#[serial]`: the environment is
/// process-global.
pub struct EnvGuard {
    key: String,
    old_value: Option<OsString>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard drops.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var_os(key);
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard drops.
    pub fn unset(key: &str) -> Self {
        let old_value = env::var_os(key);
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old_value.take() {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

/// A temporary tree with real directories, a regular file and a missing
/// path, for building path lists with known classifications.
pub struct PathFixture {
    #[allow(dead_code)]
    temp_dir: TempDir,
    pub bin: PathBuf,
    pub local_bin: PathBuf,
    pub file: PathBuf,
    pub missing: PathBuf,
}

#[allow(dead_code)]
impl PathFixture {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let bin = temp_dir.path().join("usr").join("bin");
        let local_bin = temp_dir.path().join("usr").join("local").join("bin");
        let file = temp_dir.path().join("not-a-dir");
        let missing = temp_dir.path().join("nonexistent");

        std::fs::create_dir_all(&bin).expect("Failed to create bin dir");
        std::fs::create_dir_all(&local_bin).expect("Failed to create local bin dir");
        std::fs::write(&file, b"plain file").expect("Failed to create file");

        Self {
            temp_dir,
            bin,
            local_bin,
            file,
            missing,
        }
    }

    /// Join the given paths with the platform separator.
    pub fn join(parts: &[&PathBuf]) -> String {
        parts
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(&LIST_SEPARATOR.to_string())
    }

    /// `bin`, `missing`, `local_bin`: the classic three-entry scenario.
    pub fn scenario_value(&self) -> String {
        Self::join(&[&self.bin, &self.missing, &self.local_bin])
    }

    pub fn str(path: &PathBuf) -> String {
        path.to_string_lossy().into_owned()
    }
}

impl Default for PathFixture {
    fn default() -> Self {
        Self::new()
    }
}
