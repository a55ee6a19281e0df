//! Process environment store.
//!
//! Invariants:
//! - Every access made through `ProcessEnv` holds `ENV_LOCK`, so reads and
//!   writes issued by this crate never interleave.
//! - Keys and values are validated before `set_var`/`remove_var`, which
//!   would otherwise panic on them.
//! - Non-UTF-8 variables are invisible: `lookup` reports them absent and
//!   `enumerate` skips them.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::EnvStore;
use crate::error::{EnvError, validate_key, validate_value};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvStore for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        if validate_key(key).is_err() {
            return None;
        }
        let _guard = env_guard();
        std::env::var(key).ok()
    }

    fn assign(&self, key: &str, value: &str) -> Result<(), EnvError> {
        validate_key(key)?;
        validate_value(key, value)?;
        let _guard = env_guard();
        // SAFETY: the key and value were validated above, and ENV_LOCK
        // serialises every environment access made through this crate.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), EnvError> {
        validate_key(key)?;
        let _guard = env_guard();
        // SAFETY: see `assign`.
        unsafe {
            std::env::remove_var(key);
        }
        Ok(())
    }

    fn enumerate(&self) -> BTreeMap<String, String> {
        let _guard = env_guard();
        let mut vars = BTreeMap::new();
        let mut skipped = 0usize;
        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    vars.insert(key, value);
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::debug!(skipped, "Skipped non-UTF-8 environment entries");
        }
        vars
    }

    fn clear(&self) {
        let _guard = env_guard();
        let keys: Vec<_> = std::env::vars_os().map(|(key, _)| key).collect();
        for key in keys {
            // SAFETY: keys come from the environment itself, so they are valid
            // for `remove_var`; ENV_LOCK is held.
            unsafe {
                std::env::remove_var(&key);
            }
        }
    }
}
