//! Product catalog module.
//!
//! Contains the product record and the data sources that produce the catalog.

mod product;
mod source;

pub use product::{Installment, Product};
pub use source::{CatalogSource, JsonFileCatalog, StaticCatalog, DEFAULT_CATALOG_URL};

#[cfg(feature = "http")]
pub use source::HttpCatalog;
