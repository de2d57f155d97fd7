//! Error type shared by the core crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by `herald-core`.
#[derive(Debug, Error)]
pub enum HeraldError {
    /// A file in the read list could not be read (missing, unreadable, or not UTF-8).
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HeraldError>;
