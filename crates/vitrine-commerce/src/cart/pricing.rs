//! Cart totals as displayed in the header badge and mini-cart footer.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Snapshot of the cart's derived values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Number of distinct products in the cart.
    pub quantity: usize,
    /// Sum of product prices.
    pub total: Money,
    /// Formatted total (e.g., "R$170,00").
    pub total_label: String,
}

impl CartSummary {
    pub fn new(quantity: usize, total: Money) -> Self {
        Self {
            quantity,
            total,
            total_label: total.display(),
        }
    }

    /// Check if the cart had no products.
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}
