// Account page extraction (`GET /sales`, authenticated only).

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::{number_or_zero, selector};
use crate::error::Error;
use crate::models::{AccountPage, SaleRow};

static DEBT: Lazy<Selector> = Lazy::new(|| selector(".hutang"));
static ROWS: Lazy<Selector> = Lazy::new(|| selector("tbody tr"));
static CELL: Lazy<Selector> = Lazy::new(|| selector("td"));

static BALANCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Hutang Anda : Rp\.\s+(\d+)").expect("BALANCE should compile - this is a bug")
});

/// Extract the outstanding balance and the purchase history.
pub fn parse(html: &str) -> Result<AccountPage, Error> {
    let document = Html::parse_document(html);

    let debt: String = document.select(&DEBT).flat_map(|el| el.text()).collect();
    let balance = parse_balance(&debt)?;

    let sales = document.select(&ROWS).map(parse_row).collect();

    Ok(AccountPage { balance, sales })
}

/// Recover the integer from `Hutang Anda : Rp.<whitespace><digits>`.
pub fn parse_balance(text: &str) -> Result<i64, Error> {
    let digits = BALANCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| Error::extraction("balance text `Hutang Anda : Rp.<digits>` not found"))?;

    digits
        .as_str()
        .parse()
        .map_err(|e| Error::extraction(format!("balance {:?} out of range: {e}", digits.as_str())))
}

/// Cells 1..=6 hold product, payment, qty, price, total, date (cell 0 is
/// the row number). Missing cells read as empty; numeric cells that do
/// not parse read as zero.
fn parse_row(row: ElementRef<'_>) -> SaleRow {
    let cells: Vec<String> = row
        .select(&CELL)
        .map(|td| td.text().collect::<String>().trim().to_owned())
        .collect();
    let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or_default();

    SaleRow {
        product: cell(1).to_owned(),
        payment: cell(2).to_owned(),
        qty: number_or_zero(cell(3)),
        price: number_or_zero(cell(4)),
        total: number_or_zero(cell(5)),
        date: cell(6).to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ACCOUNT: &str = r#"
        <html><body>
          <div class="hutang">Hutang Anda : Rp.   4200</div>
          <table>
            <thead><tr><th>#</th><th>Item</th></tr></thead>
            <tbody>
              <tr>
                <td>1</td>
                <td>
                  Indomie Goreng
                </td>
                <td>Credit</td>
                <td>2</td>
                <td>3000</td>
                <td>6000</td>
                <td>2016-03-01 10:12:00</td>
              </tr>
              <tr>
                <td>2</td><td>Teh Botol</td><td>Cash</td>
                <td>n/a</td><td>4500</td><td></td><td>2016-03-02</td>
              </tr>
            </tbody>
          </table>
        </body></html>
    "#;

    #[test]
    fn parses_balance_and_sales() {
        let page = parse(ACCOUNT).unwrap();
        assert_eq!(page.balance, 4200);
        assert_eq!(
            page.sales,
            vec![
                SaleRow {
                    product: "Indomie Goreng".into(),
                    payment: "Credit".into(),
                    qty: 2,
                    price: 3000,
                    total: 6000,
                    date: "2016-03-01 10:12:00".into(),
                },
                SaleRow {
                    product: "Teh Botol".into(),
                    payment: "Cash".into(),
                    qty: 0,
                    price: 4500,
                    total: 0,
                    date: "2016-03-02".into(),
                },
            ]
        );
    }

    #[test]
    fn balance_fixture() {
        assert_eq!(parse_balance("Hutang Anda : Rp.   4200").unwrap(), 4200);
    }

    #[test]
    fn missing_balance_text_is_an_extraction_error() {
        let html = r#"<html><body><form action="/login"></form></body></html>"#;
        match parse(html) {
            Err(Error::Extraction { message }) => assert!(message.contains("Hutang"), "{message}"),
            other => panic!("expected Extraction error, got {other:?}"),
        }
    }

    #[test]
    fn short_rows_fill_with_defaults() {
        let html = r#"
            <div class="hutang">Hutang Anda : Rp. 0</div>
            <table><tbody><tr><td>1</td><td>Only product</td></tr></tbody></table>
        "#;
        let page = parse(html).unwrap();
        assert_eq!(page.balance, 0);
        assert_eq!(
            page.sales,
            vec![SaleRow {
                product: "Only product".into(),
                ..SaleRow::default()
            }]
        );
    }
}
