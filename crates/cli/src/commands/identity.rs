//! Stage, package, and folder command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use envstage_config::{EnvStore, Resolver, read_manifest_name};

pub fn stage<S: EnvStore>(resolver: &Resolver<S>) -> Result<()> {
    println!("{}", resolver.stage());
    Ok(())
}

pub fn package<S: EnvStore>(resolver: &Resolver<S>, manifest: Option<PathBuf>) -> Result<()> {
    let name = match manifest {
        Some(path) => read_manifest_name(&path)
            .with_context(|| format!("Failed to read package name from {}", path.display()))?
            .unwrap_or_default(),
        None => resolver.current_package_name(),
    };
    println!("{}", name);
    Ok(())
}

pub fn folder<S: EnvStore>(resolver: &Resolver<S>) -> Result<()> {
    println!("{}", resolver.current_folder_name());
    Ok(())
}
