//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envstage")]
#[command(about = "Resolve environment variables with .env fallback", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envstage get DATABASE_URL --default sqlite://local.db\n  envstage get API_KEY --file config/.env.local --required\n  APP_ENV=staging envstage load\n  envstage list --json\n"
)]
pub struct Cli {
    /// Directory to search from instead of the current directory
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Log format for diagnostics written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for tracing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value of a key, loading a .env file if it is not set
    Get {
        /// Variable name
        key: String,

        /// Value printed when the key cannot be resolved
        #[arg(short, long, default_value = "")]
        default: String,

        /// Directory and/or dotenv file to search instead of the default
        #[arg(short, long, value_name = "HINT", default_value = "")]
        file: String,

        /// Exit with status 4 when the key cannot be resolved
        #[arg(long)]
        required: bool,
    },

    /// Print the stage taken from GO_ENV, APP_ENV, or ENV
    Stage,

    /// Load the nearest .env file and print its path
    Load {
        /// Directory and/or dotenv file to search instead of the default
        #[arg(default_value = "")]
        hint: String,
    },

    /// Print every environment variable, sorted by key
    List {
        /// Load the nearest .env file before listing
        #[arg(long)]
        load: bool,

        /// Print a JSON object instead of KEY=VALUE lines
        #[arg(long)]
        json: bool,
    },

    /// Print the package name of the working directory
    Package {
        /// Read this manifest instead, failing if it cannot be read
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
    },

    /// Print the name of the working directory
    Folder,
}
