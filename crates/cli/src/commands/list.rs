//! List command implementation.

use anyhow::{Context, Result};
use envstage_config::{EnvStore, Resolver};

pub fn run<S: EnvStore>(resolver: &Resolver<S>, load: bool, json: bool) -> Result<()> {
    if load {
        resolver.load("");
    }

    let vars = resolver.list();
    if json {
        let output =
            serde_json::to_string_pretty(&vars).context("Failed to serialize environment")?;
        println!("{}", output);
    } else {
        for (key, value) in &vars {
            println!("{}={}", key, value);
        }
    }
    Ok(())
}
