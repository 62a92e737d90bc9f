//! Mini-cart command.

use anyhow::Result;
use serde::Serialize;
use vitrine_commerce::cart::CartSummary;
use vitrine_commerce::catalog::Product;
use vitrine_commerce::ids::ProductId;
use vitrine_commerce::storefront::StorefrontCommand;

use super::CartArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CartReport<'a> {
    items: &'a [Product],
    #[serde(flatten)]
    summary: CartSummary,
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let (mut storefront, mut sink) = ctx.open_storefront(args.catalog.as_deref()).await?;

    for id in &args.add {
        let Some(id) = ProductId::parse(id) else {
            ctx.output.warn("Ignoring blank product id");
            continue;
        };
        if storefront.engine().find(&id).is_none() {
            ctx.output.warn(&format!("Unknown product: {}", id));
        }
        storefront.dispatch(StorefrontCommand::AddToCart(id), &mut sink)?;
    }
    for id in args.remove.iter().filter_map(|id| ProductId::parse(id)) {
        storefront.dispatch(StorefrontCommand::RemoveFromCart(id), &mut sink)?;
    }

    let report = CartReport {
        items: &sink.cart,
        summary: storefront.cart().summary(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Cart");
    if report.items.is_empty() {
        ctx.output.info("Cart is empty");
    }
    for product in report.items {
        ctx.output.cart_item(product);
    }

    println!();
    ctx.output.kv("quantity", &sink.quantity.to_string());
    ctx.output.kv("total", &sink.total);

    Ok(())
}
