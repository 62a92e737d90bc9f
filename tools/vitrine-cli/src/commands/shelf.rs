//! Shelf listing command.

use anyhow::Result;
use serde::Serialize;
use vitrine_commerce::catalog::Product;
use vitrine_commerce::storefront::StorefrontCommand;

use super::ShelfArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ShelfReport<'a> {
    products: &'a [Product],
    showing: usize,
    filtered: usize,
    available: usize,
    show_more: bool,
}

/// Run the shelf command.
pub async fn run(args: ShelfArgs, ctx: &Context) -> Result<()> {
    let (mut storefront, mut sink) = ctx.open_storefront(args.catalog.as_deref()).await?;

    let ceiling = storefront.config().price_ceiling_money();
    for command in args.filters.commands(ceiling)? {
        storefront.dispatch(command, &mut sink)?;
    }
    if args.more {
        storefront.dispatch(StorefrontCommand::ShowMore, &mut sink)?;
    }

    let report = ShelfReport {
        products: &sink.shelf,
        showing: sink.shelf.len(),
        filtered: storefront.engine().filtered().len(),
        available: storefront.engine().available().len(),
        show_more: sink.show_more_visible,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Shelf");
    if report.products.is_empty() {
        ctx.output.info("No products match the current filters");
        return Ok(());
    }

    ctx.output.shelf(report.products);

    println!();
    ctx.output.kv(
        "showing",
        &format!(
            "{} of {} ({} in catalog)",
            report.showing, report.filtered, report.available
        ),
    );
    if report.show_more {
        ctx.output.info("More products available, pass --more to see them");
    }

    Ok(())
}
