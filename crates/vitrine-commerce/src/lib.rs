//! Storefront core for Vitrine.
//!
//! This crate holds the state behind a product listing page:
//!
//! - **Catalog**: Product records and the sources they are fetched from
//! - **Cart**: Mini-cart with id-deduplicated products and a formatted total
//! - **Search**: Facet criteria, filtering and sorting, shelf pagination
//! - **Storefront**: A session that applies typed commands and re-renders
//!
//! The view is never read back. Every change is pushed through a
//! [`render::RenderSink`].
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_commerce::prelude::*;
//!
//! let mut storefront = Storefront::new(StorefrontConfig::default());
//! let mut sink = MemorySink::new();
//!
//! storefront
//!     .init(&JsonFileCatalog::new("products.json"), &mut sink)
//!     .await?;
//!
//! storefront.dispatch(StorefrontCommand::SetColors(vec!["Azul".into()]), &mut sink)?;
//! storefront.dispatch(StorefrontCommand::AddToCart(ProductId::new("1")), &mut sink)?;
//!
//! println!("{} on shelf, cart total {}", sink.shelf.len(), sink.total);
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod render;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod search;
pub mod storefront;

pub use error::{Result, StorefrontError};
pub use ids::*;
pub use money::{format_currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::*;
    pub use crate::money::{format_currency, Money};
    pub use crate::render::{Affordance, MemorySink, RenderSink, RenderTarget};

    // Catalog
    #[cfg(feature = "http")]
    pub use crate::catalog::HttpCatalog;
    pub use crate::catalog::{CatalogSource, Installment, JsonFileCatalog, Product, StaticCatalog};

    // Cart
    pub use crate::cart::{Cart, CartSummary};

    // Search
    pub use crate::search::{
        FacetSet, FilterCriteria, FilterEngine, PriceRange, ShelfPager, SortOrder,
    };

    // Session
    pub use crate::config::StorefrontConfig;
    pub use crate::storefront::{Storefront, StorefrontCommand};
}
