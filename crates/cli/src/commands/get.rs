//! Get command implementation.

use anyhow::Result;
use envstage_config::{EnvStore, Resolver};
use tracing::debug;

use crate::error::CliError;

pub fn run<S: EnvStore>(
    resolver: &Resolver<S>,
    key: &str,
    default: &str,
    hint: &str,
    required: bool,
) -> Result<()> {
    let value = match resolver.lookup_or_load(key, hint) {
        Some(value) => value,
        None if required => return Err(CliError::KeyNotFound(key.to_string()).into()),
        None => {
            debug!(key, "Key not resolved; using default");
            default.to_string()
        }
    };

    println!("{}", value);
    Ok(())
}
