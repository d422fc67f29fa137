// sikopat-core: session manager, local cache and facade between
// sikopat-api and consumers (CLI).

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod storefront;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_BASE_URL, SikopatConfig, cache_file_name};
pub use error::CoreError;
pub use session::{Session, SessionManager};
pub use store::{CacheData, CacheStore, FetchSource};
pub use storefront::{SiteInfo, Storefront};

pub use model::{DEFAULT_PAYMENT_METHOD_NAME, PaymentMethod, Product, Profile, Sale};

pub use secrecy::SecretString;
