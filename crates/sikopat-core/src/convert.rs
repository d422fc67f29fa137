// ── Page-record to domain conversions ──
//
// Bridges raw `sikopat_api` records into the canonical entities held by
// the cache.

use sikopat_api::{CatalogEntry, FormOption, SaleRow};

use crate::model::{PaymentMethod, Product, Sale};

impl From<CatalogEntry> for Product {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            qty: entry.qty,
            price: entry.price,
        }
    }
}

impl From<FormOption> for PaymentMethod {
    fn from(option: FormOption) -> Self {
        Self {
            id: option.value,
            name: option.label,
        }
    }
}

impl From<SaleRow> for Sale {
    fn from(row: SaleRow) -> Self {
        Self {
            product: row.product,
            payment: row.payment,
            qty: row.qty,
            price: row.price,
            total: row.total,
            date: row.date,
        }
    }
}

/// Overwrite product names with the purchase form's item labels.
///
/// Options whose value matches no product are ignored.
pub fn apply_display_names(products: &mut [Product], items: &[FormOption]) {
    for item in items {
        if let Some(product) = products.iter_mut().find(|p| p.id == item.value) {
            product.name.clone_from(&item.label);
        }
    }
}
