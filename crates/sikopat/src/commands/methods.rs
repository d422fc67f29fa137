//! `sikopat methods`

use serde::Serialize;
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Serialize)]
struct MethodView {
    id: String,
    name: String,
    default: bool,
}

#[derive(Tabled)]
struct MethodRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Default")]
    default: &'static str,
}

impl From<&MethodView> for MethodRow {
    fn from(m: &MethodView) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            default: if m.default { "*" } else { "" },
        }
    }
}

pub async fn handle(ctx: &mut Context, global: &GlobalOpts) -> Result<(), CliError> {
    let methods = ctx.shop.payment_methods(&ctx.token).await?;
    let default_id = ctx
        .shop
        .store()
        .default_payment_method()
        .map(|m| m.id.clone());

    let views: Vec<MethodView> = methods
        .into_iter()
        .map(|m| MethodView {
            default: default_id.as_deref() == Some(m.id.as_str()),
            id: m.id,
            name: m.name,
        })
        .collect();

    if views.is_empty() {
        output::notice("No payment methods known. They appear after: sikopat login", global.quiet);
        return Ok(());
    }

    let out = output::render_list(global.output, &views, |m| MethodRow::from(m), |m| m.id.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
