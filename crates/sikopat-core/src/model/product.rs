// ── Product domain type ──

use serde::{Deserialize, Serialize};

/// A catalog item. Identity is `id`, assigned by the storefront.
///
/// Anonymous listings carry a generic `name`; an authenticated sync
/// replaces it with the purchase form's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Units in stock.
    pub qty: i64,
    /// Unit price in Rupiah.
    pub price: i64,
}
