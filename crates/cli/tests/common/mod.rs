//! Shared test utilities for envstage integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that clears stage variables.
//!
//! Invariants / Assumptions:
//! - Commands start with no `GO_ENV`, `APP_ENV`, `ENV`, or `RUST_LOG`
//!   inherited from the host.

use assert_cmd::Command;

/// Stage value whose dotenv file name exists nowhere on the host.
#[allow(dead_code)]
pub const UNMATCHED_STAGE: &str = "envstage-cli-unmatched-5c1d";

/// Returns a hermetic `envstage` command for integration testing.
pub fn envstage_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envstage");

    // Clear potential host leakage
    cmd.env_remove("GO_ENV")
        .env_remove("APP_ENV")
        .env_remove("ENV")
        .env_remove("RUST_LOG");

    cmd
}
