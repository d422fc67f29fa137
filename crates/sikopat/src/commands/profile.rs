//! `sikopat profile`

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::Tabled;

use sikopat_core::{Profile, Sale};

use crate::cli::{GlobalOpts, ProfileArgs};
use crate::error::CliError;
use crate::output::{self, rupiah};

use super::Context;

/// What gets shown: the profile without its credentials.
#[derive(Serialize)]
struct ProfileView<'a> {
    username: &'a str,
    balance: i64,
    sales: &'a [Sale],
    updated_at: Option<DateTime<Utc>>,
}

impl<'a> From<&'a Profile> for ProfileView<'a> {
    fn from(p: &'a Profile) -> Self {
        Self {
            username: &p.username,
            balance: p.balance,
            sales: &p.sales,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Tabled)]
struct SaleRow<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Product")]
    product: &'a str,
    #[tabled(rename = "Payment")]
    payment: &'a str,
    #[tabled(rename = "Qty")]
    qty: i64,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl<'a> From<&'a Sale> for SaleRow<'a> {
    fn from(s: &'a Sale) -> Self {
        Self {
            date: &s.date,
            product: &s.product,
            payment: &s.payment,
            qty: s.qty,
            price: rupiah(s.price),
            total: rupiah(s.total),
        }
    }
}

fn detail(view: &ProfileView<'_>) -> String {
    let mut out = format!("Username: {}\n", view.username);
    if view.sales.is_empty() {
        out.push_str("\nNo purchases yet.\n");
    } else {
        let rows: Vec<SaleRow<'_>> = view.sales.iter().map(SaleRow::from).collect();
        let _ = write!(out, "\nSales:\n{}\n", output::render_table(&rows));
    }
    let _ = write!(out, "\nBalance:  {}", rupiah(view.balance));
    out
}

pub async fn handle(ctx: &mut Context, args: &ProfileArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let profile = ctx.shop.profile(&ctx.token, args.refresh).await?;
    let view = ProfileView::from(&profile);

    let out = output::render_single(global.output, &view, detail, |v| v.balance.to_string())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
