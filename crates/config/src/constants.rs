//! Centralized constants for the envstage workspace.
//!
//! Well-known environment keys and file-name rules shared by the resolver,
//! the package identity helpers, and the CLI.

// =============================================================================
// Stage Detection
// =============================================================================

/// Keys consulted by `Resolver::stage()`, highest priority first.
pub const STAGE_KEYS: [&str; 3] = ["GO_ENV", "APP_ENV", "ENV"];

// =============================================================================
// Dotenv Discovery
// =============================================================================

/// File name searched for when no stage is set and no explicit name is given.
pub const DEFAULT_DOTENV_FILE: &str = ".env";

/// A hint's last segment must be longer than this (in bytes) to count as a file name.
pub const MIN_FILE_NAME_LEN: usize = 3;

// =============================================================================
// Package Identity
// =============================================================================

/// Manifest file read by `Resolver::current_package_name()`.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Key holding the list of source roots used for the import-path fallback.
pub const SOURCE_PATH_VAR: &str = "SOURCE_PATH";

/// Directory under each source root that holds package sources.
pub const SOURCE_DIR: &str = "src";
