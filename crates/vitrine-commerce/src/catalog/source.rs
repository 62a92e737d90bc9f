//! Catalog data sources.
//!
//! The catalog is fetched exactly once at startup. Sources do not retry or
//! time out; any failure is reported as `DataUnavailable`.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::catalog::Product;
use crate::error::{Result, StorefrontError};

/// Default endpoint the storefront reads its catalog from.
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:5000/products";

/// Something that can produce the full product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product in the catalog.
    async fn fetch_catalog(&self) -> Result<Vec<Product>>;

    /// Human-readable description of where the catalog comes from.
    fn describe(&self) -> String;
}

/// A catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("static catalog ({} products)", self.products.len())
    }
}

/// A catalog stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Product>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            StorefrontError::DataUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            StorefrontError::DataUnavailable(format!("{}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A catalog served over HTTP as a JSON array.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    url: String,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Product>> {
        let unavailable = |e: reqwest::Error| {
            StorefrontError::DataUnavailable(format!("{}: {}", self.url, e))
        };

        self.client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(unavailable)?
            .json::<Vec<Product>>()
            .await
            .map_err(unavailable)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use std::io::Write;

    #[tokio::test]
    async fn test_static_catalog() {
        let source = StaticCatalog::new(fixtures::numbered(3));
        let products = source.fetch_catalog().await.unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(source.describe(), "static catalog (3 products)");
    }

    #[tokio::test]
    async fn test_json_file_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&fixtures::numbered(2)).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let source = JsonFileCatalog::new(file.path());
        let products = source.fetch_catalog().await.unwrap();
        assert_eq!(products, fixtures::numbered(2));
    }

    #[tokio::test]
    async fn test_json_file_catalog_missing_file() {
        let source = JsonFileCatalog::new("/nonexistent/vitrine/products.json");
        let err = source.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, StorefrontError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn test_json_file_catalog_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"id\": 1}]").unwrap();

        let err = JsonFileCatalog::new(file.path())
            .fetch_catalog()
            .await
            .unwrap_err();
        assert!(matches!(err, StorefrontError::DataUnavailable(_)));
    }
}
