//! Layered resolver for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Resolve keys from an `EnvStore`, falling back to dotenv discovery on a miss.
//! - Derive the runtime stage and the stage-specific dotenv file name.
//! - Search ancestor directories for a dotenv file and overlay it onto the store.
//!
//! Does NOT handle:
//! - Direct environment access (see `store`).
//! - Typed conversions (see `cast`) or package identity (see `package`).
//!
//! Invariants / Assumptions:
//! - Values already in the store take precedence over file values.
//! - File values overwrite store values once a file is loaded.
//! - A relative working directory is resolved against the process working directory.

mod builder;
mod path;

pub use builder::Resolver;
pub use path::{PathSpec, is_file_name};

#[cfg(test)]
mod tests;
