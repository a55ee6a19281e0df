//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the resolver from global options.
//! - Route parsed CLI arguments to the appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup (see `main()`).

use anyhow::Result;
use envstage_config::Resolver;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let mut resolver = Resolver::new();
    if let Some(dir) = cli.cwd {
        resolver = resolver.with_working_dir(dir);
    }

    match cli.command {
        Commands::Get {
            key,
            default,
            file,
            required,
        } => commands::get::run(&resolver, &key, &default, &file, required),
        Commands::Stage => commands::identity::stage(&resolver),
        Commands::Load { hint } => commands::load::run(&resolver, &hint),
        Commands::List { load, json } => commands::list::run(&resolver, load, json),
        Commands::Package { manifest } => commands::identity::package(&resolver, manifest),
        Commands::Folder => commands::identity::folder(&resolver),
    }
}
