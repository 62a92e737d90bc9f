//! Mini-cart state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::CartSummary;
use crate::catalog::Product;
use crate::error::Result;
use crate::ids::ProductId;
use crate::money::Money;
use crate::render::RenderSink;

/// The shopping cart.
///
/// Products are kept in insertion order but behave as a set keyed by id:
/// adding a product that is already present changes nothing. Every mutation
/// re-renders items, quantity and total through the sink.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the initial (empty) cart state.
    pub fn init(&self, sink: &mut dyn RenderSink) -> Result<()> {
        self.calculate_total_price(sink)?;
        self.render(sink)
    }

    /// Add products that are not in the cart yet, then re-render.
    ///
    /// Duplicates, both against the cart and within `products`, are ignored.
    pub fn add_to_cart<I>(&mut self, products: I, sink: &mut dyn RenderSink) -> Result<()>
    where
        I: IntoIterator<Item = Product>,
    {
        for product in products {
            if self.contains(&product.id) {
                debug!(product_id = %product.id, "product already in cart");
                continue;
            }
            self.items.push(product);
        }
        self.render(sink)
    }

    /// Remove the product with `id` if present, then re-render.
    pub fn remove_from_cart(&mut self, id: &ProductId, sink: &mut dyn RenderSink) -> Result<()> {
        self.items.retain(|p| &p.id != id);
        self.render(sink)
    }

    /// Write the formatted total to the sink.
    pub fn calculate_total_price(&self, sink: &mut dyn RenderSink) -> Result<()> {
        sink.set_total(&self.total().display())
    }

    /// Write the number of products to the sink.
    pub fn update_cart_quantity(&self, sink: &mut dyn RenderSink) -> Result<()> {
        sink.set_quantity(self.len())
    }

    /// Full redraw: items, quantity badge and total.
    pub fn render(&self, sink: &mut dyn RenderSink) -> Result<()> {
        sink.replace_cart(&self.items)?;
        self.update_cart_quantity(sink)?;
        self.calculate_total_price(sink)
    }

    /// Products in the cart, in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == id)
    }

    /// Sum of the prices of every product in the cart.
    pub fn total(&self) -> Money {
        self.items.iter().map(|p| &p.price).sum()
    }

    /// Quantity and total as the view shows them.
    pub fn summary(&self) -> CartSummary {
        CartSummary::new(self.len(), self.total())
    }
}
