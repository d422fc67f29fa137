// ── Cache store ──
//
// Single JSON document holding everything the client knows. Loaded once,
// rewritten in full after every mutation. One writer per file is assumed.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::filter::fuzzy_matches;
use crate::error::CoreError;
use crate::model::{PaymentMethod, Product, Profile};

/// Which kind of session produced a batch of entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    Anonymous,
    Authenticated,
}

/// The persisted aggregate. Missing fields load as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheData {
    pub profiles: BTreeMap<String, Profile>,
    /// Keyed by product id, in page order.
    pub products: IndexMap<String, Product>,
    /// Keyed by method id, in page order.
    pub payment_methods: IndexMap<String, PaymentMethod>,
    /// Always keys an entry of `payment_methods` when set.
    pub default_method: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// In-memory cache bound to its backing file.
#[derive(Debug)]
pub struct CacheStore {
    path: PathBuf,
    data: CacheData,
}

impl CacheStore {
    /// Load the store from `path`.
    ///
    /// Never fails: a missing file starts empty, an unreadable or corrupt
    /// one is logged and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut data = load(&path);

        let methods = &data.payment_methods;
        if let Some(id) = data
            .default_method
            .take_if(|id| !methods.contains_key(id.as_str()))
        {
            warn!(default = %id, "dropping default payment method missing from cache");
        }

        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &CacheData {
        &self.data
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.data.updated_at
    }

    // ── Profiles ─────────────────────────────────────────────────────

    pub fn profile(&self, token: &str) -> Option<&Profile> {
        self.data.profiles.get(token)
    }

    /// Store `profile` under `token`, stamping its `updated_at`.
    pub fn set_profile(&mut self, token: &str, mut profile: Profile) -> Result<&Profile, CoreError> {
        token.clone_into(&mut profile.token);
        profile.updated_at = Some(Utc::now());
        let mut next = self.data.clone();
        next.profiles.insert(token.to_owned(), profile);
        self.commit(next)?;
        self.data
            .profiles
            .get(token)
            .ok_or(CoreError::NotLoggedIn)
    }

    /// Remove the profile for `token`. Persists only if one was removed.
    pub fn delete_profile(&mut self, token: &str) -> Result<Option<Profile>, CoreError> {
        if !self.data.profiles.contains_key(token) {
            return Ok(None);
        }
        let mut next = self.data.clone();
        let removed = next.profiles.remove(token);
        self.commit(next)?;
        Ok(removed)
    }

    // ── Catalog ──────────────────────────────────────────────────────

    /// Replace the product set, unless an anonymous fetch would overwrite
    /// a non-empty set. Returns whether the set was replaced.
    pub fn merge_products(
        &mut self,
        products: Vec<Product>,
        source: FetchSource,
    ) -> Result<bool, CoreError> {
        if source == FetchSource::Anonymous && !self.data.products.is_empty() {
            debug!(
                incoming = products.len(),
                kept = self.data.products.len(),
                "keeping cached products over anonymous fetch"
            );
            return Ok(false);
        }

        let mut next = self.data.clone();
        next.products = products.into_iter().map(|p| (p.id.clone(), p)).collect();
        next.updated_at = Some(Utc::now());
        self.commit(next)?;
        debug!(count = self.data.products.len(), ?source, "replaced products");
        Ok(true)
    }

    /// Same policy as [`merge_products`](Self::merge_products); a
    /// replacement also recomputes the default method.
    pub fn merge_payment_methods(
        &mut self,
        methods: Vec<PaymentMethod>,
        source: FetchSource,
    ) -> Result<bool, CoreError> {
        if source == FetchSource::Anonymous && !self.data.payment_methods.is_empty() {
            debug!("keeping cached payment methods over anonymous fetch");
            return Ok(false);
        }

        let mut next = self.data.clone();
        next.payment_methods = methods.into_iter().map(|m| (m.id.clone(), m)).collect();
        next.default_method = credit_method(&next.payment_methods);
        next.updated_at = Some(Utc::now());
        self.commit(next)?;
        debug!(
            count = self.data.payment_methods.len(),
            default = ?self.data.default_method,
            "replaced payment methods"
        );
        Ok(true)
    }

    /// Point the default at the first method named "Credit", or clear it.
    pub fn recompute_default_method(&mut self) {
        self.data.default_method = credit_method(&self.data.payment_methods);
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.data.products.values()
    }

    /// Products whose name fuzzily matches `filter`, in page order.
    pub fn filter_products(&self, filter: &str) -> Vec<Product> {
        self.products()
            .filter(|p| fuzzy_matches(&p.name, filter))
            .cloned()
            .collect()
    }

    pub fn payment_methods(&self) -> impl Iterator<Item = &PaymentMethod> {
        self.data.payment_methods.values()
    }

    pub fn default_payment_method(&self) -> Option<&PaymentMethod> {
        self.data
            .default_method
            .as_deref()
            .and_then(|id| self.data.payment_methods.get(id))
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Write the whole store to its file, creating the directory if needed.
    pub fn persist(&self) -> Result<(), CoreError> {
        write(&self.path, &self.data)
    }

    /// Persist `next`, then make it the in-memory state. On a write
    /// failure the store keeps its previous state.
    fn commit(&mut self, next: CacheData) -> Result<(), CoreError> {
        write(&self.path, &next)?;
        self.data = next;
        Ok(())
    }
}

fn credit_method(methods: &IndexMap<String, PaymentMethod>) -> Option<String> {
    methods
        .values()
        .find(|m| m.is_default_candidate())
        .map(|m| m.id.clone())
}

fn write(path: &Path, data: &CacheData) -> Result<(), CoreError> {
    let failed = |source: io::Error| CoreError::PersistenceFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(failed)?;
    }

    let json = serde_json::to_string_pretty(data).map_err(|e| failed(io::Error::other(e)))?;
    std::fs::write(path, json).map_err(failed)?;

    debug!(path = %path.display(), "cache persisted");
    Ok(())
}

fn load(path: &Path) -> CacheData {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no cache file yet");
            return CacheData::default();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read cache file, starting empty");
            return CacheData::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "corrupt cache file, starting empty");
        CacheData::default()
    })
}
