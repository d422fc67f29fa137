//! `sikopat logout`

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::Context;

pub async fn handle(ctx: &mut Context, global: &GlobalOpts) -> Result<(), CliError> {
    ctx.shop.logout(&ctx.token).await?;
    ctx.token_file.remove()?;
    ctx.token.clear();

    output::notice("Logged out", global.quiet);
    Ok(())
}
