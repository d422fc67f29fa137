// Catalog listing extraction (`GET /`).

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::{number_or_zero, selector, text_of};
use crate::error::Error;
use crate::models::CatalogEntry;

/// Query-parameter marker that precedes the product id in entry links.
const ITEM_MARKER: &str = "item=";

static ENTRY: Lazy<Selector> = Lazy::new(|| selector(".imgList"));
static NAME: Lazy<Selector> = Lazy::new(|| selector("strong"));
static LINK: Lazy<Selector> = Lazy::new(|| selector("a"));
static SUBHEADER: Lazy<Selector> = Lazy::new(|| selector(".subheader"));

/// `<qty> Pcs Rp.<price>`
static QTY_PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^ ]+)\s+Pcs\s+Rp\.(\d+)").expect("QTY_PRICE should compile - this is a bug")
});

/// Extract every catalog entry from the listing page.
///
/// Entries without a link, or whose link has no `item=` parameter, are
/// skipped. An entry whose quantity/price block does not match fails the
/// whole page, so callers never see a partial catalog.
pub fn parse(html: &str) -> Result<Vec<CatalogEntry>, Error> {
    let document = Html::parse_document(html);
    document
        .select(&ENTRY)
        .filter_map(|entry| parse_entry(entry).transpose())
        .collect()
}

fn parse_entry(entry: ElementRef<'_>) -> Result<Option<CatalogEntry>, Error> {
    let Some(href) = entry
        .select(&LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
    else {
        return Ok(None);
    };
    let Some(id) = item_id(href) else {
        return Ok(None);
    };

    let name = text_of(entry, &NAME);
    let (qty, price) = parse_qty_price(&text_of(entry, &SUBHEADER)).map_err(|e| match e {
        Error::Extraction { message } => Error::extraction(format!("product {id}: {message}")),
        other => other,
    })?;

    Ok(Some(CatalogEntry {
        id: id.to_owned(),
        name,
        qty,
        price,
    }))
}

/// The substring after the first `item=` marker, up to any repeated marker.
fn item_id(href: &str) -> Option<&str> {
    let (_, rest) = href.split_once(ITEM_MARKER)?;
    rest.split(ITEM_MARKER).next().filter(|id| !id.is_empty())
}

/// Recover `(qty, price)` from a listing's secondary text block.
pub fn parse_qty_price(text: &str) -> Result<(i64, i64), Error> {
    let caps = QTY_PRICE.captures(text).ok_or_else(|| {
        Error::extraction(format!("expected `<qty> Pcs Rp.<price>`, got {text:?}"))
    })?;
    // Both groups are mandatory in the pattern; a quantity token that is not
    // numeric (e.g. "-") reads as zero.
    let qty = caps.get(1).map_or(0, |m| number_or_zero(m.as_str()));
    let price = caps.get(2).map_or(0, |m| number_or_zero(m.as_str()));
    Ok((qty, price))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const LISTING: &str = r#"
        <html><body>
          <div class="imgList">
            <a href="/index.php/sales/null/create?item=17"><img src="a.png"></a>
            <strong>Indomie Goreng</strong>
            <p class="subheader">24 Pcs Rp.3000</p>
          </div>
          <div class="imgList">
            <a href="/index.php/sales/null/create?item=42"><img src="b.png"></a>
            <strong>Teh Botol</strong>
            <p class="subheader">
              5 Pcs Rp.4500
            </p>
          </div>
          <div class="imgList">
            <strong>Banner without link</strong>
            <p class="subheader">garbage</p>
          </div>
          <div class="imgList">
            <a href="/index.php/about">About</a>
            <strong>Link without item marker</strong>
          </div>
        </body></html>
    "#;

    #[test]
    fn parses_entries_and_skips_unlinked_ones() {
        let entries = parse(LISTING).unwrap();
        assert_eq!(
            entries,
            vec![
                CatalogEntry {
                    id: "17".into(),
                    name: "Indomie Goreng".into(),
                    qty: 24,
                    price: 3000,
                },
                CatalogEntry {
                    id: "42".into(),
                    name: "Teh Botol".into(),
                    qty: 5,
                    price: 4500,
                },
            ]
        );
    }

    #[test]
    fn mismatched_price_block_fails_the_page() {
        let html = r#"
            <div class="imgList">
              <a href="?item=1"></a><strong>Ok</strong>
              <p class="subheader">1 Pcs Rp.100</p>
            </div>
            <div class="imgList">
              <a href="?item=2"></a><strong>Broken</strong>
              <p class="subheader">sold out</p>
            </div>
        "#;
        let err = parse(html).unwrap_err();
        match err {
            Error::Extraction { message } => assert!(message.contains("product 2"), "{message}"),
            other => panic!("expected Extraction error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_quantity_reads_as_zero() {
        assert_eq!(parse_qty_price("- Pcs Rp.2500").unwrap(), (0, 2500));
    }

    #[test]
    fn item_id_takes_segment_after_marker() {
        assert_eq!(item_id("/buy?item=abc"), Some("abc"));
        assert_eq!(item_id("/buy?item=abc&item=def"), Some("abc&"));
        assert_eq!(item_id("/buy?item="), None);
        assert_eq!(item_id("/buy"), None);
    }

    #[test]
    fn empty_listing_yields_no_entries() {
        assert!(parse("<html><body><p>closed</p></body></html>").unwrap().is_empty());
    }
}
