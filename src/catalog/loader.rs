//! Catalog sources and the one-time async load.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use super::error::{CatalogError, CatalogResult};
use super::types::Catalog;

#[async_trait]
/// Where raw catalog bytes come from.
pub trait CatalogSource: Send + Sync {
    /// Fetches the raw catalog document.
    async fn fetch(&self) -> CatalogResult<Vec<u8>>;
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Reads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> CatalogResult<Vec<u8>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CatalogError::NotFound {
                path: self.path.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a catalog document held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    bytes: Vec<u8>,
}

impl StaticCatalogSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch(&self) -> CatalogResult<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.bytes.len())
    }
}

/// Fetches, decodes, and validates the catalog.
pub async fn load_catalog(source: &dyn CatalogSource) -> CatalogResult<Catalog> {
    let origin = source.describe();
    debug!(source = %origin, "Fetching catalog");

    let bytes = source.fetch().await?;
    let catalog = Catalog::from_json_slice(&bytes)?;

    info!(
        source = %origin,
        makes = catalog.len(),
        models = catalog.model_count(),
        "Catalog loaded"
    );
    Ok(catalog)
}
