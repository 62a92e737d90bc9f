//! Render sink seam between the storefront core and the view layer.
//!
//! The core never reads back from the view. Every call is a one-way
//! replacement of a named target; a target the view cannot provide is
//! reported as [`StorefrontError::PreconditionFailed`].

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::{Result, StorefrontError};

/// A view region the core writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderTarget {
    /// Mini-cart item list.
    CartItems,
    /// Header badge with the number of products in the cart.
    CartQuantity,
    /// Mini-cart footer total.
    CartTotal,
    /// Product shelf grid.
    Shelf,
    /// "Show more" button below the shelf.
    ShowMore,
}

impl RenderTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderTarget::CartItems => "cart-items",
            RenderTarget::CartQuantity => "cart-quantity",
            RenderTarget::CartTotal => "cart-total",
            RenderTarget::Shelf => "shelf",
            RenderTarget::ShowMore => "show-more",
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An element whose visibility the core toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affordance {
    /// The shelf "show more" button.
    ShowMore,
}

impl Affordance {
    /// Render target backing this affordance.
    pub fn target(&self) -> RenderTarget {
        match self {
            Affordance::ShowMore => RenderTarget::ShowMore,
        }
    }
}

/// Capability set the core uses to keep the view in sync.
///
/// Each method fully replaces what the target showed before.
pub trait RenderSink {
    /// Replace the mini-cart item list.
    fn replace_cart(&mut self, items: &[Product]) -> Result<()>;

    /// Replace the shelf with the visible products.
    fn replace_shelf(&mut self, items: &[Product]) -> Result<()>;

    /// Set the cart quantity badge.
    fn set_quantity(&mut self, quantity: usize) -> Result<()>;

    /// Set the formatted cart total.
    fn set_total(&mut self, text: &str) -> Result<()>;

    /// Show or hide an affordance.
    fn set_visible(&mut self, affordance: Affordance, visible: bool) -> Result<()>;
}

/// In-memory sink that keeps the latest state of every target.
///
/// Used by tests and by the CLI, which prints the captured state after
/// dispatching its commands.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Products currently shown in the mini-cart.
    pub cart: Vec<Product>,
    /// Products currently shown on the shelf.
    pub shelf: Vec<Product>,
    /// Cart quantity badge.
    pub quantity: usize,
    /// Cart total text.
    pub total: String,
    /// Whether the "show more" button is visible.
    pub show_more_visible: bool,
    /// Number of shelf replacements received.
    pub shelf_renders: usize,
    /// Number of cart replacements received.
    pub cart_renders: usize,
    missing: BTreeSet<RenderTarget>,
}

impl MemorySink {
    /// Create a sink with every target available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a target unavailable, so writes to it fail.
    pub fn without_target(mut self, target: RenderTarget) -> Self {
        self.missing.insert(target);
        self
    }

    /// Ids of the products on the shelf, in display order.
    pub fn shelf_ids(&self) -> Vec<&str> {
        self.shelf.iter().map(|p| p.id.as_str()).collect()
    }

    /// Ids of the products in the mini-cart, in display order.
    pub fn cart_ids(&self) -> Vec<&str> {
        self.cart.iter().map(|p| p.id.as_str()).collect()
    }

    fn check(&self, target: RenderTarget) -> Result<()> {
        if self.missing.contains(&target) {
            return Err(StorefrontError::missing_target(target));
        }
        Ok(())
    }
}

impl RenderSink for MemorySink {
    fn replace_cart(&mut self, items: &[Product]) -> Result<()> {
        self.check(RenderTarget::CartItems)?;
        self.cart = items.to_vec();
        self.cart_renders += 1;
        Ok(())
    }

    fn replace_shelf(&mut self, items: &[Product]) -> Result<()> {
        self.check(RenderTarget::Shelf)?;
        self.shelf = items.to_vec();
        self.shelf_renders += 1;
        Ok(())
    }

    fn set_quantity(&mut self, quantity: usize) -> Result<()> {
        self.check(RenderTarget::CartQuantity)?;
        self.quantity = quantity;
        Ok(())
    }

    fn set_total(&mut self, text: &str) -> Result<()> {
        self.check(RenderTarget::CartTotal)?;
        self.total = text.to_string();
        Ok(())
    }

    fn set_visible(&mut self, affordance: Affordance, visible: bool) -> Result<()> {
        self.check(affordance.target())?;
        match affordance {
            Affordance::ShowMore => self.show_more_visible = visible,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_missing_target() {
        let mut sink = MemorySink::new().without_target(RenderTarget::Shelf);
        let err = sink.replace_shelf(&[]).unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::PreconditionFailed {
                target: RenderTarget::Shelf
            }
        ));
        assert_eq!(sink.shelf_renders, 0);

        // Other targets are unaffected.
        sink.set_quantity(3).unwrap();
        assert_eq!(sink.quantity, 3);
    }

    #[test]
    fn test_memory_sink_visibility() {
        let mut sink = MemorySink::new();
        sink.set_visible(Affordance::ShowMore, true).unwrap();
        assert!(sink.show_more_visible);
        sink.set_visible(Affordance::ShowMore, false).unwrap();
        assert!(!sink.show_more_visible);
    }
}
