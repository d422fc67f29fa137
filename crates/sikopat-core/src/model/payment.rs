// ── Payment method domain type ──

use serde::{Deserialize, Serialize};

/// Name of the method picked as default for purchases.
pub const DEFAULT_PAYMENT_METHOD_NAME: &str = "Credit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
}

impl PaymentMethod {
    /// Whether this method qualifies as the purchase default.
    pub fn is_default_candidate(&self) -> bool {
        self.name == DEFAULT_PAYMENT_METHOD_NAME
    }
}
