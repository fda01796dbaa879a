//! Error types for loading render options.
//!
//! Rendering itself does not fail: unknown types fall back to default
//! shapes, dangling references are skipped and missing views produce a
//! placeholder document. Only reading configuration and writing documents
//! can return an [`Error`].

use std::io;

use thiserror::Error;

/// The error type of this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid render options: {0}")]
    Config(#[from] toml::de::Error),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
