//! Shopping cart module.
//!
//! Contains the cart aggregate and its derived totals.

mod cart;
mod pricing;

pub use cart::Cart;
pub use pricing::CartSummary;
