// Purchase form extraction (`GET /sales/null/create`, authenticated only).

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::selector;
use crate::error::Error;
use crate::models::{FormOption, PurchaseForm};

static PAYMENT_SELECT: Lazy<Selector> = Lazy::new(|| selector("select[name=payment]"));
static ITEM_OPTIONS: Lazy<Selector> = Lazy::new(|| selector("select[name=item] option"));
static PAYMENT_OPTIONS: Lazy<Selector> = Lazy::new(|| selector("select[name=payment] option"));

/// Extract the item and payment option lists.
///
/// The payment `<select>` must be present: without it the server answered
/// with some other page (typically the login form after the session
/// expired) and an empty method list would be wrong, not merely empty.
pub fn parse(html: &str) -> Result<PurchaseForm, Error> {
    let document = Html::parse_document(html);

    if document.select(&PAYMENT_SELECT).next().is_none() {
        return Err(Error::extraction(
            "purchase form has no payment selector (session may have expired)",
        ));
    }

    Ok(PurchaseForm {
        items: options(&document, &ITEM_OPTIONS),
        payments: options(&document, &PAYMENT_OPTIONS),
    })
}

/// Options with a non-empty `value`, labels trimmed.
fn options(document: &Html, sel: &Selector) -> Vec<FormOption> {
    document
        .select(sel)
        .filter_map(|opt| {
            let value = opt.value().attr("value").unwrap_or_default();
            if value.is_empty() {
                return None;
            }
            Some(FormOption {
                value: value.to_owned(),
                label: opt.text().collect::<String>().trim().to_owned(),
            })
        })
        .collect()
}
