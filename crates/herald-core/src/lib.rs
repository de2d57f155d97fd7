//! Herald Core: configuration, shared errors, and the file-size reader.
//!
//! - **config**: `~/.herald/config.json` schema, loader, and env overrides
//! - **error**: `HeraldError`, the error type for everything in this crate
//! - **files**: sequential reader that totals the byte size of a file list
//! - **utils**: data directory and path helpers

pub mod config;
pub mod error;
pub mod files;
pub mod utils;

pub use error::{HeraldError, Result};
