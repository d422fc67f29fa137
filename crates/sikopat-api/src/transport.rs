// Shared transport configuration for building reqwest::Client instances.
//
// Every session owns its own client and cookie jar; this module keeps the
// builder logic (user agent, optional timeout, jar wiring) in one place.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;

const DEFAULT_USER_AGENT: &str = concat!("sikopat/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Overall request timeout. `None` leaves reqwest's default in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` wired to the given cookie jar.
    pub fn build_client(&self, jar: &Arc<Jar>) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .cookie_provider(Arc::clone(jar));

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| crate::error::Error::Client(e.to_string()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
