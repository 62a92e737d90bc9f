//! Storefront configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_CATALOG_URL;
use crate::error::{Result, StorefrontError};
use crate::money::{Money, MAX_AMOUNT_CENTS};
use crate::search::{DEFAULT_PAGE_SIZE, PRICE_CEILING};

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Largest accepted price ceiling, in reais.
pub const MAX_PRICE_CEILING: i64 = MAX_AMOUNT_CENTS / 100;

/// Tunables for a storefront session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Products per shelf page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Upper bound, in reais, of the price range used when the price facet
    /// is touched but nothing valid is checked.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: i64,
    /// Endpoint serving the catalog.
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_price_ceiling() -> i64 {
    PRICE_CEILING
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            price_ceiling: default_price_ceiling(),
            catalog_url: default_catalog_url(),
        }
    }
}

impl StorefrontConfig {
    /// Check the values are usable.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(StorefrontError::Config(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }
        if !(0..=MAX_PRICE_CEILING).contains(&self.price_ceiling) {
            return Err(StorefrontError::Config(format!(
                "price_ceiling must be between 0 and {}, got {}",
                MAX_PRICE_CEILING, self.price_ceiling
            )));
        }
        if self.catalog_url.trim().is_empty() {
            return Err(StorefrontError::Config(
                "catalog_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The price ceiling as money.
    pub fn price_ceiling_money(&self) -> Money {
        Money::from_reais(self.price_ceiling)
    }
}
