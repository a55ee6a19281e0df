//! CLI errors and exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map CLI and library errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes are stable: 0 success, 1 general error, 4 not found.

use envstage_config::EnvError;
use thiserror::Error;

/// Failures raised by command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Key '{0}' is not set and no .env file provides it")]
    KeyNotFound(String),
}

/// Structured exit codes for envstage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Resource not found - a required key could not be resolved.
    NotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::KeyNotFound(_) => ExitCode::NotFound,
        }
    }
}

impl From<&EnvError> for ExitCode {
    fn from(err: &EnvError) -> Self {
        match err {
            EnvError::ManifestRead { .. } => ExitCode::NotFound,
            EnvError::InvalidKey { .. }
            | EnvError::InvalidValue { .. }
            | EnvError::ManifestParse { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
            if let Some(env_err) = cause.downcast_ref::<EnvError>() {
                return ExitCode::from(env_err);
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
    }

    #[test]
    fn test_key_not_found_maps_to_not_found() {
        let err = anyhow::Error::new(CliError::KeyNotFound("API_KEY".to_string()));
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err: anyhow::Error = Err::<(), _>(CliError::KeyNotFound("X".to_string()))
            .context("while resolving")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_env_errors_map_to_general_error() {
        let err = anyhow::Error::new(EnvError::InvalidKey {
            key: "A=B".to_string(),
            reason: "key must not contain '='",
        });
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_unknown_error_maps_to_general_error() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
