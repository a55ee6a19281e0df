//! Environment store adapters.
//!
//! Responsibilities:
//! - Define the `EnvStore` trait the resolver reads from and writes to.
//! - Provide `ProcessEnv` (the real process environment) and `MemoryEnv`
//!   (an isolated, shareable map).
//!
//! Does NOT handle:
//! - Dotenv discovery or parsing (see `loader`).
//!
//! Invariants:
//! - Mutations are immediately visible to every reader of the same store.
//! - Last writer wins; there are no transactions.
//! - `assign` and `remove` reject keys that no platform can store.

mod memory;
mod process;

use std::collections::BTreeMap;

use crate::error::EnvError;

pub use memory::MemoryEnv;
pub use process::ProcessEnv;

/// Key/value store backing a `Resolver`.
///
/// Implementations must be cheap to share: the resolver holds one by value,
/// so a store that should be observed from elsewhere (tests, other resolvers)
/// is expected to be a handle onto shared state.
pub trait EnvStore: Send + Sync {
    /// Read a value. Returns `None` when the key is not set.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Set a value, overwriting any existing one.
    fn assign(&self, key: &str, value: &str) -> Result<(), EnvError>;

    /// Unset a key. Removing a key that is not set is not an error.
    fn remove(&self, key: &str) -> Result<(), EnvError>;

    /// Snapshot of every variable currently set.
    fn enumerate(&self) -> BTreeMap<String, String>;

    /// Remove every variable.
    fn clear(&self);

    /// Returns true if the key is set, even to an empty value.
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

impl<S: EnvStore + ?Sized> EnvStore for &S {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn assign(&self, key: &str, value: &str) -> Result<(), EnvError> {
        (**self).assign(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), EnvError> {
        (**self).remove(key)
    }

    fn enumerate(&self) -> BTreeMap<String, String> {
        (**self).enumerate()
    }

    fn clear(&self) {
        (**self).clear()
    }
}
