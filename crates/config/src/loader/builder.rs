//! Layered resolver implementation.
//!
//! Responsibilities:
//! - Resolve keys from the environment store, falling back to dotenv discovery.
//! - Derive the stage and the stage-specific default file name.
//! - Search ancestor directories for a dotenv file and overlay it onto the store.
//!
//! Does NOT handle:
//! - Candidate path derivation (delegated to path.rs).
//! - Typed conversions (see `cast.rs`) or package identity (see `package.rs`).
//!
//! Invariants / Assumptions:
//! - Store values always win over files; a present key never touches the filesystem.
//! - Loading overwrites keys already in the store.
//! - The first existing candidate ends the search, even if it fails to parse.
//! - Nothing in the load path returns an error; failures are logged and absorbed.
//! - Candidate paths are derived from an absolute working directory.
//! - Dotenv failures are logged without raw line contents to prevent secret leakage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::path::PathSpec;
use crate::constants::{DEFAULT_DOTENV_FILE, STAGE_KEYS};
use crate::error::EnvError;
use crate::store::{EnvStore, ProcessEnv};

/// Resolves configuration values from an environment store, loading `.env`
/// files from the working directory's ancestors on a miss.
#[derive(Debug, Clone)]
pub struct Resolver<S = ProcessEnv> {
    store: S,
    working_dir: Option<PathBuf>,
}

impl Default for Resolver<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver<ProcessEnv> {
    /// Create a resolver over the process environment.
    pub fn new() -> Self {
        Self::with_store(ProcessEnv)
    }
}

impl<S: EnvStore> Resolver<S> {
    /// Create a resolver over the given store.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            working_dir: None,
        }
    }

    /// Use `dir` instead of the process working directory.
    ///
    /// Affects the default search start, the fallback for hints without
    /// directories, relative candidate paths, and manifest lookup.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The directory searches start from, made absolute.
    ///
    /// A relative override is resolved against the process working directory.
    /// Falls back to the override as given (or an empty path) if the process
    /// working directory is unavailable.
    pub fn working_dir(&self) -> PathBuf {
        let Some(dir) = &self.working_dir else {
            return match std::env::current_dir() {
                Ok(dir) => dir,
                Err(e) => {
                    tracing::debug!(error = %e, "Working directory unavailable");
                    PathBuf::new()
                }
            };
        };
        match std::path::absolute(dir) {
            Ok(dir) => dir,
            Err(e) => {
                tracing::debug!(
                    dir = %dir.display(),
                    error = %e,
                    "Could not make working directory absolute"
                );
                dir.clone()
            }
        }
    }

    /// Look up `key`, loading a dotenv file located via `hint` on a miss.
    pub fn lookup_or_load(&self, key: &str, hint: &str) -> Option<String> {
        if let Some(value) = self.store.lookup(key) {
            return Some(value);
        }
        self.load(hint);
        self.store.lookup(key)
    }

    /// Value of `key`, or an empty string.
    pub fn get(&self, key: &str) -> String {
        self.get_from(key, "", "")
    }

    /// Value of `key`, or `default`.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get_from(key, default, "")
    }

    /// Value of `key`, loading from the file located via `hint` on a miss,
    /// or `default`.
    pub fn get_from(&self, key: &str, default: &str, hint: &str) -> String {
        self.lookup_or_load(key, hint)
            .unwrap_or_else(|| default.to_string())
    }

    /// The runtime stage: the trimmed value of the first of `GO_ENV`,
    /// `APP_ENV`, `ENV` that is set.
    ///
    /// A key set to an empty or blank value still wins over later keys.
    pub fn stage(&self) -> String {
        STAGE_KEYS
            .iter()
            .find_map(|key| self.store.lookup(key))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    /// `.env`, or `.env.<stage>` with the stage lowercased when one is set.
    pub fn default_file_name(&self) -> String {
        let stage = self.stage();
        if stage.is_empty() {
            DEFAULT_DOTENV_FILE.to_string()
        } else {
            format!("{}.{}", DEFAULT_DOTENV_FILE, stage.to_lowercase())
        }
    }

    /// Find the nearest dotenv file and overlay it onto the store.
    ///
    /// With an empty `hint` the search starts at the working directory and
    /// looks for `default_file_name()`. Otherwise the hint's directories are
    /// searched, and a trailing dotfile segment (such as `.env.local`) names
    /// the file. Each candidate directory is tried from the deepest up to the
    /// filesystem root; the first existing file is loaded and ends the search.
    ///
    /// Returns the path of the file whose entries were applied. Missing files,
    /// unreadable files, and parse errors all yield `None`.
    pub fn load(&self, hint: &str) -> Option<PathBuf> {
        let working_dir = self.working_dir();
        let spec = PathSpec::derive(
            hint,
            &self.default_file_name(),
            &working_dir.to_string_lossy(),
        );

        for candidate in spec.candidates() {
            let path = working_dir.join(&candidate);
            tracing::debug!(candidate = %path.display(), "Checking for dotenv file");
            if std::fs::symlink_metadata(&path).is_err() {
                continue;
            }
            return self.overlay(&path).then_some(path);
        }

        tracing::debug!(file_name = spec.file_name(), "No dotenv file found");
        None
    }

    /// Parse `path` and write every entry into the store, overwriting existing keys.
    ///
    /// Nothing is written unless the whole file parses.
    fn overlay(&self, path: &Path) -> bool {
        let entries = dotenvy::from_path_iter(path)
            .and_then(|iter| iter.collect::<Result<Vec<(String, String)>, _>>());

        let entries = match entries {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    reason = %describe_dotenv_error(&e),
                    "Failed to load dotenv file"
                );
                return false;
            }
        };

        for (key, value) in &entries {
            if let Err(e) = self.store.assign(key, value) {
                tracing::warn!(path = %path.display(), error = %e, "Skipped dotenv entry");
            }
        }
        tracing::debug!(path = %path.display(), count = entries.len(), "Loaded dotenv file");
        true
    }

    /// Set a value in the store.
    pub fn set(&self, key: &str, value: &str) -> Result<(), EnvError> {
        self.store.assign(key, value)
    }

    /// Remove a key from the store.
    pub fn unset(&self, key: &str) -> Result<(), EnvError> {
        self.store.remove(key)
    }

    /// Snapshot of every variable in the store.
    pub fn list(&self) -> BTreeMap<String, String> {
        self.store.enumerate()
    }

    /// Remove every variable from the store.
    pub fn clear(&self) {
        self.store.clear()
    }
}

/// Describe a dotenv error without the offending line.
///
/// SAFETY: `dotenvy::Error::LineParse` carries the raw line, which may hold a
/// secret; only its byte index is reported.
fn describe_dotenv_error(err: &dotenvy::Error) -> String {
    match err {
        dotenvy::Error::LineParse(_, idx) => format!("parse error at position {}", idx),
        dotenvy::Error::Io(io_err) => format!("I/O error: {}", io_err.kind()),
        _ => "unknown error".to_string(),
    }
}
