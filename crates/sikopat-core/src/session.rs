// ── Session manager ──
//
// Maps local tokens to storefront clients. Each logged-in token owns a
// client with a private cookie jar; everything else shares one lazily
// created anonymous client.

use std::collections::HashMap;

use secrecy::SecretString;
use sikopat_api::{SiteClient, TransportConfig};
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::error::CoreError;

/// A freshly authenticated session, already registered under `token`.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub client: SiteClient,
    pub remote_session_id: String,
}

#[derive(Debug)]
pub struct SessionManager {
    base_url: Url,
    transport: TransportConfig,
    anonymous: Option<SiteClient>,
    sessions: HashMap<String, SiteClient>,
}

impl SessionManager {
    pub fn new(base_url: Url, transport: TransportConfig) -> Self {
        Self {
            base_url,
            transport,
            anonymous: None,
            sessions: HashMap::new(),
        }
    }

    /// The client registered for `token`, or the shared anonymous client.
    ///
    /// Never creates an authenticated client.
    pub fn resolve(&mut self, token: &str) -> Result<SiteClient, CoreError> {
        if !token.is_empty() {
            if let Some(client) = self.sessions.get(token) {
                return Ok(client.clone());
            }
        }

        if let Some(client) = &self.anonymous {
            return Ok(client.clone());
        }

        debug!("creating anonymous client");
        let client = self.new_client()?;
        self.anonymous = Some(client.clone());
        Ok(client)
    }

    /// A client with an empty cookie jar.
    pub fn new_client(&self) -> Result<SiteClient, CoreError> {
        Ok(SiteClient::new(self.base_url.clone(), &self.transport)?)
    }

    pub fn generate_token() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.sessions.contains_key(token)
    }

    pub fn register(&mut self, token: String, client: SiteClient) {
        self.sessions.insert(token, client);
    }

    pub fn remove(&mut self, token: &str) -> Option<SiteClient> {
        self.sessions.remove(token)
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Log in with a fresh client and register it under `token` (or a
    /// newly generated one). Replaces any client already held for it.
    pub async fn login(
        &mut self,
        token: Option<String>,
        username: &str,
        password: &SecretString,
    ) -> Result<Session, CoreError> {
        let client = self.new_client()?;
        let remote_session_id = client.login(username, password).await?;

        let token = token
            .filter(|t| !t.is_empty())
            .unwrap_or_else(Self::generate_token);
        self.register(token.clone(), client.clone());
        info!(%username, "logged in");

        Ok(Session {
            token,
            client,
            remote_session_id,
        })
    }

    /// Forget `token`. An authenticated client is logged out server-side
    /// first; that call is best-effort.
    pub async fn logout(&mut self, token: &str) {
        let Some(client) = self.remove(token) else {
            debug!("logout for unknown token");
            return;
        };

        if client.is_authenticated() {
            if let Err(e) = client.logout().await {
                warn!(error = %e, "server logout failed, dropping session anyway");
            }
        }
        info!("logged out");
    }

    /// Build a client carrying a previously issued session cookie and
    /// check the server still honours it. `None` if it does not.
    pub async fn restore(&self, remote_session_id: &str) -> Result<Option<SiteClient>, CoreError> {
        let client = self.new_client()?;
        client.restore_session(remote_session_id);

        match client.validate_session().await {
            Ok(()) => Ok(Some(client)),
            Err(e) if e.is_transport() => Err(e.into()),
            Err(e) => {
                debug!(error = %e, "stored session rejected");
                Ok(None)
            }
        }
    }
}
