//! Integration tests for global CLI options.
//!
//! These tests verify global flags and environment variables that affect
//! logging:
//! - --verbose flag
//! - --quiet flag
//! - ENVPATH_LOG_MODE environment variable
//! - Precedence rules (CLI flags > env vars > defaults)

mod common;

use assert_cmd::assert::OutputAssertExt;
use common::TestEnv;
use predicates::prelude::*;

/// --verbose adds debug output on stderr and leaves stdout alone.
#[test]
fn test_verbose_flag_logs_to_stderr() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "--only-count"])
        .assert()
        .success()
        .stdout("3")
        .stderr(predicate::str::contains("DEBUG: read 3 entries from PATH"));
}

/// Without --verbose nothing is logged for a clean run.
#[test]
fn test_default_is_silent_on_stderr() {
    let env = TestEnv::new();

    env.command()
        .arg("--only-count")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

/// ENVPATH_LOG_MODE=verbose behaves like --verbose.
#[test]
fn test_log_mode_env() {
    let env = TestEnv::new();

    env.command()
        .env("ENVPATH_LOG_MODE", "verbose")
        .arg("--only-count")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG:"));
}

/// --quiet overrides ENVPATH_LOG_MODE.
#[test]
fn test_quiet_overrides_env() {
    let env = TestEnv::new();

    env.command()
        .env("ENVPATH_LOG_MODE", "verbose")
        .args(["--quiet", "--only-count"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

/// A PATH that is not valid unicode is still reported, with a warning.
#[cfg(unix)]
#[test]
fn test_non_unicode_path_warns() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let env = TestEnv::new();
    let mut cmd = env.command_bare();
    cmd.env("PATH", OsStr::from_bytes(b"/bin:/odd\xff"));

    cmd.arg("--only-count")
        .assert()
        .success()
        .stdout("2")
        .stderr(predicate::str::contains("WARN:"));
}

/// --quiet silences the unicode warning.
#[cfg(unix)]
#[test]
fn test_non_unicode_path_quiet() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let env = TestEnv::new();
    let mut cmd = env.command_bare();
    cmd.env("PATH", OsStr::from_bytes(b"/bin:/odd\xff"));

    cmd.args(["--quiet", "--only-count"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

/// Stdin that cannot be read counts as "no" and is reported as a warning.
#[cfg(unix)]
#[test]
fn test_unreadable_confirmation_warns() {
    let env = TestEnv::new();
    // Reading from a directory handle fails with EISDIR.
    let stdin = std::fs::File::open(&env.bin).expect("Failed to open directory");

    env.std_command()
        .stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned PATH value:").not())
        .stderr(predicate::str::contains("WARN: could not read confirmation"));
}

/// Scripted answers never read stdin, so an unreadable stdin is harmless.
#[cfg(unix)]
#[test]
fn test_scripted_answer_ignores_stdin() {
    let env = TestEnv::new();
    let stdin = std::fs::File::open(&env.bin).expect("Failed to open directory");

    env.std_command()
        .arg("--no-prompt")
        .stdin(stdin)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

/// Failed lookups are traced at verbose level.
#[cfg(unix)]
#[test]
fn test_verbose_traces_failed_lookup() {
    let env = TestEnv::new();
    let below_file = env.file.join("sub");

    env.command_with_path(&common::display(&below_file))
        .args(["--verbose", "--only-list-invalid"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG: lookup of"));

    env.command_with_path(&common::display(&below_file))
        .arg("--only-list-invalid")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

/// A directory whose name is not valid unicode is valid and printed verbatim.
#[cfg(unix)]
#[test]
fn test_non_unicode_directory_is_valid() {
    use std::ffi::{OsStr, OsString};
    use std::os::unix::ffi::OsStrExt;

    let env = TestEnv::new();
    let mut dir = OsString::from(env.bin.as_os_str());
    dir.push(OsStr::from_bytes(b"\xff"));
    std::fs::create_dir(&dir).expect("Failed to create test directory");

    let mut cmd = env.command_bare();
    cmd.env("PATH", &dir);

    cmd.arg("--only-list-valid")
        .assert()
        .success()
        .stdout(dir.as_bytes().to_vec())
        .stderr(predicate::str::contains("WARN:"));
}
