//! Storefront session: one cart, one set of criteria, one engine and one
//! pager, driven by typed commands.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::cart::Cart;
use crate::catalog::CatalogSource;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::ids::ProductId;
use crate::money::Money;
use crate::render::RenderSink;
use crate::search::{FacetSet, FilterCriteria, FilterEngine, ShelfPager, SortOrder};

/// A user interaction the storefront reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StorefrontCommand {
    /// Change the shelf sort order.
    SetSortOrder(SortOrder),
    /// Replace the color selection.
    SetColors(Vec<String>),
    /// Replace the size selection.
    SetSizes(Vec<String>),
    /// Replace the price selection with the checked band tokens.
    SetPriceBands(Vec<String>),
    /// Set an explicit price range.
    SetPriceRange { min: Money, max: Money },
    /// Drop every facet and the sort order.
    ClearFilters,
    /// Reveal one more page of the shelf.
    ShowMore,
    /// Put a catalog product in the cart.
    AddToCart(ProductId),
    /// Take a product out of the cart.
    RemoveFromCart(ProductId),
}

/// The storefront state.
///
/// Every command completes its re-render through the sink before
/// [`Storefront::dispatch`] returns.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StorefrontConfig,
    cart: Cart,
    criteria: FilterCriteria,
    engine: FilterEngine,
    pager: ShelfPager,
}

impl Storefront {
    /// Create an empty storefront.
    pub fn new(config: StorefrontConfig) -> Self {
        let pager = ShelfPager::new(config.page_size);
        Self {
            config,
            cart: Cart::new(),
            criteria: FilterCriteria::new(),
            engine: FilterEngine::new(),
            pager,
        }
    }

    /// Render the empty cart, fetch the catalog once and render the first
    /// shelf page.
    ///
    /// On fetch failure the catalog stays empty and the error is returned.
    pub async fn init(
        &mut self,
        source: &dyn CatalogSource,
        sink: &mut dyn RenderSink,
    ) -> Result<()> {
        self.cart.init(sink)?;

        let products = match source.fetch_catalog().await {
            Ok(products) => products,
            Err(e) => {
                error!(source = %source.describe(), error = %e, "failed to load catalog");
                return Err(e);
            }
        };
        info!(
            source = %source.describe(),
            products = products.len(),
            "catalog loaded"
        );

        self.engine.load(products);
        self.apply_filters(sink)
    }

    /// Apply a command and re-render what it affects.
    pub fn dispatch(
        &mut self,
        command: StorefrontCommand,
        sink: &mut dyn RenderSink,
    ) -> Result<()> {
        match command {
            StorefrontCommand::SetSortOrder(order) => {
                self.criteria.set_sort(order);
                self.apply_filters(sink)
            }
            StorefrontCommand::SetColors(colors) => {
                self.criteria.set_colors(colors);
                self.apply_filters(sink)
            }
            StorefrontCommand::SetSizes(sizes) => {
                self.criteria.set_sizes(sizes);
                self.apply_filters(sink)
            }
            StorefrontCommand::SetPriceBands(tokens) => {
                self.criteria
                    .set_price_bands(tokens, self.config.price_ceiling_money());
                self.apply_filters(sink)
            }
            StorefrontCommand::SetPriceRange { min, max } => {
                self.criteria.set_price_range(min, max)?;
                self.apply_filters(sink)
            }
            StorefrontCommand::ClearFilters => {
                self.criteria.clear();
                self.apply_filters(sink)
            }
            StorefrontCommand::ShowMore => self.pager.expand(self.engine.filtered(), sink),
            StorefrontCommand::AddToCart(id) => match self.engine.find(&id) {
                Some(product) => {
                    let product = product.clone();
                    self.cart.add_to_cart([product], sink)
                }
                None => {
                    debug!(product_id = %id, "ignoring unknown product");
                    Ok(())
                }
            },
            StorefrontCommand::RemoveFromCart(id) => self.cart.remove_from_cart(&id, sink),
        }
    }

    /// Recompute the filtered view from the full catalog and redraw the shelf.
    pub fn apply_filters(&mut self, sink: &mut dyn RenderSink) -> Result<()> {
        self.engine.apply(&self.criteria);
        self.pager.refresh(self.engine.filtered(), sink)
    }

    /// Facet options counted over the full catalog.
    pub fn facets(&self) -> FacetSet {
        FacetSet::from_catalog(self.engine.available(), &self.criteria)
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    pub fn pager(&self) -> &ShelfPager {
        &self.pager
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}
