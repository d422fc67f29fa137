// ── Local cache ──
//
// The persisted aggregate of profiles, products and payment methods, with
// the merge policy that decides which fetches may overwrite it.

mod cache_store;
mod filter;

pub use cache_store::{CacheData, CacheStore, FetchSource};
pub use filter::fuzzy_matches;
