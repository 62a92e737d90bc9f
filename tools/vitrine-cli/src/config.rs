//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vitrine_commerce::config::StorefrontConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["vitrine.toml", ".vitrine.toml", "vitrine.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront tunables.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Endpoint to fetch the catalog from: `[catalog] url` wins over
    /// `[storefront] catalog_url`.
    pub fn catalog_url(&self) -> &str {
        self.catalog
            .url
            .as_deref()
            .unwrap_or(&self.storefront.catalog_url)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file holding the catalog. Takes precedence over `url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Endpoint serving the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Generate a default vitrine.toml config file.
pub fn generate_default_config() -> String {
    r#"# Vitrine storefront configuration

[storefront]
page_size = 9
price_ceiling = 9999
catalog_url = "http://localhost:5000/products"

[catalog]
# Read the catalog from a file instead of the endpoint.
# path = "products.json"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_catalog_url_precedence() {
        let mut config = CliConfig::default();
        assert_eq!(config.catalog_url(), "http://localhost:5000/products");

        config.catalog.url = Some("http://shop.test/products".to_string());
        assert_eq!(config.catalog_url(), "http://shop.test/products");
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitrine.json");
        let mut config = CliConfig::default();
        config.storefront.page_size = 12;
        config.catalog.path = Some("products.json".to_string());

        config.save(&path).unwrap();

        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: CliConfig = toml::from_str("[storefront]\npage_size = 3\n").unwrap();
        assert_eq!(config.storefront.page_size, 3);
        assert_eq!(config.storefront.price_ceiling, 9999);
        assert!(config.catalog.path.is_none());
    }
}
