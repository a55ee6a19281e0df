//! Load command implementation.

use anyhow::Result;
use envstage_config::{EnvStore, Resolver};

pub fn run<S: EnvStore>(resolver: &Resolver<S>, hint: &str) -> Result<()> {
    match resolver.load(hint) {
        Some(path) => println!("{}", path.display()),
        None => eprintln!(
            "No {} file loaded from {}",
            resolver.default_file_name(),
            resolver.working_dir().display()
        ),
    }
    Ok(())
}
