//! envstage - Command-line front end for environment resolution.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Resolve keys, stages, and package identity via the shared config library.
//!
//! Does NOT handle:
//! - Resolution logic or dotenv discovery (see `crates/config`).
//!
//! Invariants:
//! - Values go to stdout; diagnostics and logs go to stderr.
//! - Logging is controlled by `RUST_LOG` and is silent by default.

mod args;
mod commands;
mod dispatch;
mod error;

use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    if cli.log_format == LogFormat::Json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
