// Storefront page records
//
// Raw values recovered from the server-rendered pages. These mirror the
// page structure, not the domain: `sikopat-core` converts them into its
// canonical entities and decides how they merge into the cache.

/// One entry of the public catalog listing (`GET /`).
///
/// `name` is the generic listing title; the purchase form carries the
/// authoritative display name for authenticated sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub qty: i64,
    pub price: i64,
}

/// A non-empty `<option>` of a purchase-form `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOption {
    pub value: String,
    pub label: String,
}

/// The option lists of the purchase form (`GET /sales/null/create`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseForm {
    /// Options of `select[name=item]`: product id → display name.
    pub items: Vec<FormOption>,
    /// Options of `select[name=payment]`: payment method id → label.
    pub payments: Vec<FormOption>,
}

/// One row of the purchase history table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleRow {
    pub product: String,
    pub payment: String,
    pub qty: i64,
    pub price: i64,
    pub total: i64,
    pub date: String,
}

/// The account page (`GET /sales`): outstanding balance plus history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPage {
    pub balance: i64,
    pub sales: Vec<SaleRow>,
}
