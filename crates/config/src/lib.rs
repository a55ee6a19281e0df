//! Environment configuration with `.env` fallback for envstage.
//!
//! This crate reads configuration values from an environment store and, when
//! a key is missing, searches the working directory and its ancestors for a
//! dotenv file to overlay before trying again.

pub mod cast;
pub mod constants;
mod error;
mod loader;
pub mod package;
pub mod store;

pub use error::EnvError;
pub use loader::{PathSpec, Resolver, is_file_name};
pub use package::{import_path, read_manifest_name};
pub use store::{EnvStore, MemoryEnv, ProcessEnv};
