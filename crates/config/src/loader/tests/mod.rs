//! Tests for the layered resolver.
//!
//! Responsibilities:
//! - Test key resolution and default fallback.
//! - Test stage detection and the stage-specific file name.
//! - Test ancestor search, overwrite semantics, and failure absorption.
//! - Test discovery against the real process environment and working directory.
//!
//! Invariants:
//! - Tests use an isolated `MemoryEnv` and `with_working_dir` unless they are
//!   specifically about the process environment.
//! - Process-environment tests use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::Path;
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Stage value whose dotenv file name exists nowhere on the host.
pub const UNMATCHED_STAGE: &str = "envstage-unmatched-7f3a";

/// Write `contents` to `dir/relative`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}
