//! Error types for environment access.
//!
//! Responsibilities:
//! - Define error variants for store mutations and manifest reads.
//!
//! Does NOT handle:
//! - Dotenv discovery or parse failures. Those are absorbed by the resolver
//!   and only ever logged.
//!
//! Invariants:
//! - All error variants include context for debugging (keys, paths).
//! - Error messages NEVER include environment values, to prevent secret leakage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while mutating the environment or reading a manifest.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Invalid environment key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// The value cannot be stored by the platform.
    ///
    /// SAFETY: Only the key is reported, never the rejected value.
    #[error("Invalid value for environment key '{key}': values must not contain NUL")]
    InvalidValue { key: String },

    #[error("Failed to read manifest at {path}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest at {path}")]
    ManifestParse { path: PathBuf },
}

/// Check that a key/value pair can be stored by any platform environment.
pub(crate) fn validate_key(key: &str) -> Result<(), EnvError> {
    let reason = if key.is_empty() {
        "key must not be empty"
    } else if key.contains('=') {
        "key must not contain '='"
    } else if key.contains('\0') {
        "key must not contain NUL"
    } else {
        return Ok(());
    };

    Err(EnvError::InvalidKey {
        key: key.to_string(),
        reason,
    })
}

pub(crate) fn validate_value(key: &str, value: &str) -> Result<(), EnvError> {
    if value.contains('\0') {
        return Err(EnvError::InvalidValue {
            key: key.to_string(),
        });
    }
    Ok(())
}
