// ── Sale domain type ──

use serde::{Deserialize, Serialize};

/// One past purchase, as listed on the account page. Never merged:
/// every profile refresh replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub product: String,
    pub payment: String,
    pub qty: i64,
    pub price: i64,
    pub total: i64,
    pub date: String,
}
