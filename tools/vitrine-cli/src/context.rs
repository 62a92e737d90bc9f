//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use vitrine_commerce::catalog::{CatalogSource, JsonFileCatalog};
use vitrine_commerce::render::MemorySink;
use vitrine_commerce::storefront::Storefront;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    pub fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Pick the catalog source: an explicit file, the configured file, or
    /// the configured endpoint.
    pub fn catalog_source(&self, override_path: Option<&str>) -> Result<Box<dyn CatalogSource>> {
        if let Some(path) = override_path.or(self.config.catalog.path.as_deref()) {
            return Ok(Box::new(JsonFileCatalog::new(self.resolve_path(path))));
        }
        self.http_source()
    }

    #[cfg(feature = "http")]
    fn http_source(&self) -> Result<Box<dyn CatalogSource>> {
        Ok(Box::new(vitrine_commerce::catalog::HttpCatalog::new(
            self.config.catalog_url(),
        )))
    }

    #[cfg(not(feature = "http"))]
    fn http_source(&self) -> Result<Box<dyn CatalogSource>> {
        anyhow::bail!(
            "No catalog file configured. Pass --catalog or set [catalog] path; \
             fetching {} requires the `http` feature.",
            self.config.catalog_url()
        )
    }

    /// Create a storefront and load its catalog into a fresh sink.
    pub async fn open_storefront(
        &self,
        catalog: Option<&str>,
    ) -> Result<(Storefront, MemorySink)> {
        self.config
            .storefront
            .validate()
            .context("Invalid [storefront] configuration")?;

        let source = self.catalog_source(catalog)?;
        let mut storefront = Storefront::new(self.config.storefront.clone());
        let mut sink = MemorySink::new();

        let spinner = self
            .output
            .spinner(&format!("Loading catalog from {}...", source.describe()));
        let loaded = storefront.init(source.as_ref(), &mut sink).await;
        spinner.finish_and_clear();
        loaded.with_context(|| format!("Failed to load catalog from {}", source.describe()))?;

        self.output.debug(&format!(
            "Loaded {} products",
            storefront.engine().available().len()
        ));

        Ok((storefront, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".vitrine.toml"), "").unwrap();

        let found = Context::find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(".vitrine.toml"));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("vitrine.json"), "{}").unwrap();
        std::fs::write(dir.path().join("vitrine.toml"), "").unwrap();

        let found = Context::find_config(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("vitrine.toml"));
    }
}
