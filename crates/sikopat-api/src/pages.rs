// Storefront pages
//
// One method per page the client reads or submits. Each fetches the raw
// markup and hands it to the matching `extract` module.

use reqwest::StatusCode;
use tracing::debug;

use crate::client::SiteClient;
use crate::error::Error;
use crate::extract;
use crate::models::{AccountPage, CatalogEntry, PurchaseForm};

pub const CATALOG_PATH: &str = "/";
pub const ACCOUNT_PATH: &str = "/sales";
pub const PURCHASE_FORM_PATH: &str = "/sales/null/create";

impl SiteClient {
    /// The public catalog listing. Works for anonymous clients.
    pub async fn catalog(&self) -> Result<Vec<CatalogEntry>, Error> {
        let body = self.get_page(CATALOG_PATH).await?;
        let entries = extract::catalog::parse(&body)?;
        debug!(count = entries.len(), "parsed catalog");
        Ok(entries)
    }

    /// The purchase form's option lists. Requires a session cookie.
    pub async fn purchase_form(&self) -> Result<PurchaseForm, Error> {
        let body = self.get_page(PURCHASE_FORM_PATH).await?;
        let form = extract::purchase_form::parse(&body)?;
        debug!(
            items = form.items.len(),
            payments = form.payments.len(),
            "parsed purchase form"
        );
        Ok(form)
    }

    /// Balance and purchase history. Requires a session cookie.
    pub async fn account(&self) -> Result<AccountPage, Error> {
        let body = self.get_page(ACCOUNT_PATH).await?;
        extract::account::parse(&body)
    }

    /// Submit the purchase form (form-encoded `item`, `payment`, `quantity`).
    ///
    /// Returns the response status untouched: the confirmation page is
    /// not interpreted, so only transport failures are errors here.
    pub async fn create_sale(
        &self,
        item: &str,
        payment: &str,
        quantity: u32,
    ) -> Result<StatusCode, Error> {
        let quantity = quantity.to_string();
        let form = [
            ("item", item),
            ("payment", payment),
            ("quantity", quantity.as_str()),
        ];
        let resp = self.post_form(PURCHASE_FORM_PATH, &form).await?;
        Ok(resp.status())
    }
}
