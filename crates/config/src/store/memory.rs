//! In-memory environment store.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::EnvStore;
use crate::error::{EnvError, validate_key, validate_value};

/// An isolated environment backed by a shared map.
///
/// Clones share the same map, so a clone handed to a `Resolver` observes
/// writes made through the original and vice versa.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    vars: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryEnv {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given pairs.
    ///
    /// Pairs are inserted as-is; no key validation is applied.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }

    /// Number of variables currently set.
    pub fn len(&self) -> usize {
        self.vars.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnvStore for MemoryEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn assign(&self, key: &str, value: &str) -> Result<(), EnvError> {
        validate_key(key)?;
        validate_value(key, value)?;
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), EnvError> {
        validate_key(key)?;
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }

    fn enumerate(&self) -> BTreeMap<String, String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
