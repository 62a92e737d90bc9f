//! Facet listing command.

use anyhow::Result;
use vitrine_commerce::search::SortOrder;

use super::FacetsArgs;
use crate::context::Context;

/// Run the facets command.
pub async fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let (mut storefront, mut sink) = ctx.open_storefront(args.catalog.as_deref()).await?;

    let ceiling = storefront.config().price_ceiling_money();
    for command in args.filters.commands(ceiling)? {
        storefront.dispatch(command, &mut sink)?;
    }

    let facets = storefront.facets();

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    for facet in facets.groups() {
        ctx.output.header(&facet.name);
        for value in &facet.values {
            ctx.output
                .option(value.selected, &value.label, &value.count.to_string());
        }
    }

    ctx.output.header("Ordenar por");
    let active = storefront.criteria().sort;
    for order in SortOrder::OPTIONS {
        ctx.output.option(order == active, order.label(), order.as_str());
    }

    Ok(())
}
