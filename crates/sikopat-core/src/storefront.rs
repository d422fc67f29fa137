// ── Storefront facade ──
//
// The entry point for consumers. Owns the session manager and the cache,
// and runs every operation as fetch, extract, merge, persist, return.
// Operations take `&mut self`: one caller drives one instance.

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use sikopat_api::SiteClient;
use tracing::{debug, info, warn};

use crate::config::SikopatConfig;
use crate::convert::apply_display_names;
use crate::error::CoreError;
use crate::model::{PaymentMethod, Product, Profile, Sale};
use crate::session::SessionManager;
use crate::store::{CacheStore, FetchSource};

/// Static description of a running client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    pub version: String,
    pub base_url: String,
    pub data_dir: PathBuf,
    pub cache_file: PathBuf,
}

#[derive(Debug)]
pub struct Storefront {
    config: SikopatConfig,
    sessions: SessionManager,
    store: CacheStore,
}

impl Storefront {
    /// Load the cache and prepare an idle session manager. No network
    /// traffic happens until an operation needs it.
    pub fn new(config: SikopatConfig) -> Self {
        let store = CacheStore::open(config.cache_path());
        let sessions = SessionManager::new(config.base_url.clone(), config.transport());
        Self {
            config,
            sessions,
            store,
        }
    }

    pub fn config(&self) -> &SikopatConfig {
        &self.config
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    pub fn info(&self) -> SiteInfo {
        SiteInfo {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            base_url: self.config.base_url.to_string(),
            data_dir: self.config.data_dir.clone(),
            cache_file: self.store.path().to_path_buf(),
        }
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Log in and return a new token. The profile is refreshed before
    /// returning; if that fails the login fails and nothing is kept.
    pub async fn login(&mut self, username: &str, password: &SecretString) -> Result<String, CoreError> {
        self.authenticate(None, username, password).await
    }

    async fn authenticate(
        &mut self,
        token: Option<String>,
        username: &str,
        password: &SecretString,
    ) -> Result<String, CoreError> {
        let session = self.sessions.login(token, username, password).await?;

        let mut profile = Profile::new(username, password.expose_secret());
        profile.remote_session_id = session.remote_session_id;

        if let Err(e) = self.refresh_profile(&session.token, &session.client, profile).await {
            self.sessions.remove(&session.token);
            return Err(e);
        }
        Ok(session.token)
    }

    /// Drop the session and its cached profile. Succeeds for unknown
    /// tokens; the server is only notified for live sessions.
    pub async fn logout(&mut self, token: &str) -> Result<(), CoreError> {
        self.sessions.logout(token).await;
        self.store.delete_profile(token)?;
        Ok(())
    }

    /// Re-attach `token` to the storefront in a new process.
    ///
    /// Tries the cached session cookie first, then the cached credentials.
    /// `false` means the caller carries on anonymously.
    pub async fn resume(&mut self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        if self.sessions.contains(token) {
            return true;
        }
        let Some(profile) = self.store.profile(token).cloned() else {
            debug!("no cached profile for token");
            return false;
        };

        if !profile.remote_session_id.is_empty() {
            match self.sessions.restore(&profile.remote_session_id).await {
                Ok(Some(client)) => {
                    self.sessions.register(token.to_owned(), client);
                    debug!(username = %profile.username, "session cookie restored");
                    return true;
                }
                Ok(None) => debug!("session cookie expired, logging in again"),
                Err(e) => warn!(error = %e, "cannot check stored session"),
            }
        }

        let password = SecretString::from(profile.password);
        match self
            .authenticate(Some(token.to_owned()), &profile.username, &password)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!(username = %profile.username, error = %e, "re-login failed, continuing anonymously");
                false
            }
        }
    }

    // ── Profile ──────────────────────────────────────────────────────

    /// The cached profile, or a fresh one from the account page when
    /// `force` is set or nothing is cached.
    pub async fn profile(&mut self, token: &str, force: bool) -> Result<Profile, CoreError> {
        let cached = self.store.profile(token).cloned();
        if !force {
            if let Some(profile) = cached {
                return Ok(profile);
            }
        }

        let (client, source) = self.session(token)?;
        let Some(profile) = cached.filter(|_| source == FetchSource::Authenticated) else {
            return Err(CoreError::NotLoggedIn);
        };

        self.refresh_profile(token, &client, profile).await
    }

    async fn refresh_profile(
        &mut self,
        token: &str,
        client: &SiteClient,
        mut profile: Profile,
    ) -> Result<Profile, CoreError> {
        let page = client.account().await?;
        profile.balance = page.balance;
        profile.sales = page.sales.into_iter().map(Sale::from).collect();

        debug!(balance = profile.balance, sales = profile.sales.len(), "profile refreshed");
        Ok(self.store.set_profile(token, profile)?.clone())
    }

    // ── Catalog ──────────────────────────────────────────────────────

    /// Sync the catalog, then return the products matching `filter`.
    pub async fn products(&mut self, token: &str, filter: &str) -> Result<Vec<Product>, CoreError> {
        self.sync_catalog(token).await?;
        Ok(self.store.filter_products(filter))
    }

    pub async fn payment_methods(&mut self, token: &str) -> Result<Vec<PaymentMethod>, CoreError> {
        self.sync_catalog(token).await?;
        Ok(self.store.payment_methods().cloned().collect())
    }

    pub async fn default_payment_method(
        &mut self,
        token: &str,
    ) -> Result<Option<PaymentMethod>, CoreError> {
        self.sync_catalog(token).await?;
        Ok(self.store.default_payment_method().cloned())
    }

    /// Purchase `qty` units of `product` with the default payment method,
    /// syncing the catalog first.
    ///
    /// The confirmation page is not inspected: only transport failures
    /// fail the purchase. A non-success status is logged.
    pub async fn buy(&mut self, token: &str, product: &Product, qty: u32) -> Result<(), CoreError> {
        let (client, source) = self.session(token)?;
        if source == FetchSource::Anonymous {
            return Err(CoreError::NotLoggedIn);
        }

        let method = self
            .default_payment_method(token)
            .await?
            .ok_or(CoreError::NoDefaultPaymentMethod)?;

        let status = client.create_sale(&product.id, &method.id, qty).await?;
        if status.is_success() {
            info!(product = %product.name, qty, payment = %method.name, "purchase submitted");
        } else {
            warn!(product = %product.name, %status, "purchase form answered with an error status");
        }
        Ok(())
    }

    /// Fetch the catalog (and, for logged-in sessions, the purchase form)
    /// and merge under the cache policy. A purchase-form failure aborts
    /// the sync before anything is merged.
    async fn sync_catalog(&mut self, token: &str) -> Result<(), CoreError> {
        let (client, source) = self.session(token)?;
        debug!(?source, "syncing catalog");

        let mut products: Vec<Product> = client.catalog().await?.into_iter().map(Product::from).collect();

        if source == FetchSource::Anonymous {
            self.store.merge_products(products, source)?;
            return Ok(());
        }

        let form = client.purchase_form().await?;
        apply_display_names(&mut products, &form.items);
        let methods = form.payments.into_iter().map(PaymentMethod::from).collect();

        self.store.merge_products(products, source)?;
        self.store.merge_payment_methods(methods, source)?;
        Ok(())
    }

    /// Resolve `token` and classify it. Only a registered session with a
    /// cookie counts as authenticated; the shared anonymous client never
    /// does, whatever cookies the server handed it.
    fn session(&mut self, token: &str) -> Result<(SiteClient, FetchSource), CoreError> {
        let client = self.sessions.resolve(token)?;
        let source = if self.sessions.contains(token) && client.is_authenticated() {
            FetchSource::Authenticated
        } else {
            FetchSource::Anonymous
        };
        Ok((client, source))
    }
}
