// sikopat-api: async client for the Sikopat storefront.
//
// The storefront has no machine-readable API. This crate logs in through
// the HTML form, keeps the session cookie in a per-client jar, and turns
// server-rendered pages into plain records.

pub mod auth;
pub mod client;
pub mod error;
pub mod extract;
pub mod models;
pub mod pages;
pub mod transport;

pub use client::{SESSION_COOKIE, SiteClient};
pub use error::Error;
pub use models::{AccountPage, CatalogEntry, FormOption, PurchaseForm, SaleRow};
pub use transport::TransportConfig;
