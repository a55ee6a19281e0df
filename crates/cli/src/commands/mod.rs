//! Command handlers for the envstage CLI.

pub mod get;
pub mod identity;
pub mod list;
pub mod load;
