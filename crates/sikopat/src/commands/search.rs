//! `sikopat search`

use crate::cli::{GlobalOpts, SearchArgs};
use crate::error::CliError;
use crate::output;

use super::Context;
use super::util::ProductRow;

pub async fn handle(ctx: &mut Context, args: &SearchArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let products = ctx.shop.products(&ctx.token, &args.filter).await?;

    let out = output::render_list(global.output, &products, |p| ProductRow::from(p), |p| p.id.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
