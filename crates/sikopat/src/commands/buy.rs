//! `sikopat buy`

use crate::cli::{BuyArgs, GlobalOpts};
use crate::error::CliError;
use crate::output::{self, rupiah};

use super::Context;
use super::util::{self, ProductRow};

pub async fn handle(ctx: &mut Context, args: &BuyArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut candidates = ctx.shop.products(&ctx.token, &args.filter).await?;

    let product = match candidates.len() {
        0 => {
            return Err(CliError::NoProductMatch {
                filter: args.filter.clone(),
            });
        }
        1 => candidates.remove(0),
        count => {
            let rows: Vec<ProductRow> = candidates.iter().map(ProductRow::from).collect();
            output::print_output(&output::render_table(&rows), global.quiet);
            return Err(CliError::AmbiguousProduct {
                filter: args.filter.clone(),
                count,
            });
        }
    };

    let total = product.price.saturating_mul(i64::from(args.quantity));
    output::notice(
        &format!(
            "Product:  {} ({} in stock, {} each)\nQuantity: {}\nTotal:    {}",
            product.name,
            product.qty,
            rupiah(product.price),
            args.quantity,
            rupiah(total),
        ),
        global.quiet,
    );

    if !util::confirm(&format!("Buy {} x {}?", args.quantity, product.name), args.yes)? {
        output::notice("Purchase cancelled", global.quiet);
        return Ok(());
    }

    ctx.shop.buy(&ctx.token, &product, args.quantity).await?;
    output::notice("Purchase submitted", global.quiet);
    Ok(())
}
