use std::path::PathBuf;
use thiserror::Error;

/// Failures while fetching or decoding the make/model catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {reason}")]
    Invalid { reason: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
