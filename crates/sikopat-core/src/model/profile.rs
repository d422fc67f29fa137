// ── Profile domain type ──

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sale::Sale;

/// A logged-in user as known to this process.
///
/// `token` is the local handle handed to callers; `remote_session_id` is
/// the storefront's own cookie value. Credentials are kept so an expired
/// remote session can be re-established without prompting.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub token: String,
    pub username: String,
    pub password: String,
    pub remote_session_id: String,
    /// Outstanding debt in Rupiah.
    pub balance: i64,
    pub sales: Vec<Sale>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("token", &self.token)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("remote_session_id", &"[REDACTED]")
            .field("balance", &self.balance)
            .field("sales", &self.sales.len())
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
