// ── Domain model ──
//
// Canonical entities held in the cache and returned to consumers.
// Plain values: merge policy lives in the store, page parsing in the api crate.

pub mod payment;
pub mod product;
pub mod profile;
pub mod sale;

pub use payment::{DEFAULT_PAYMENT_METHOD_NAME, PaymentMethod};
pub use product::Product;
pub use profile::Profile;
pub use sale::Sale;
