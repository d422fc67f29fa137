// Markup extraction
//
// Pure `html -> records` functions, one module per page. Selectors and
// patterns are tied to the storefront's current templates; every pattern
// match is checked and a mismatch surfaces as `Error::Extraction`.

pub mod account;
pub mod catalog;
pub mod purchase_form;

use scraper::{ElementRef, Selector};

/// Parse a hard-coded CSS selector.
fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Concatenated, trimmed text of every element matching `sel` under `scope`.
fn text_of(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope
        .select(sel)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Lenient integer parse: anything unparsable reads as zero.
fn number_or_zero(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}
