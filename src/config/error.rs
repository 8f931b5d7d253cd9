//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A suggestion limit was zero.
    #[error("invalid {name} '{value}': must be at least 1")]
    InvalidLimit { name: &'static str, value: String },

    /// A suggestion limit could not be parsed as a number.
    #[error("failed to parse {name} '{value}': {source}")]
    LimitParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Path exists but is not a file.
    #[error("path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },
}
