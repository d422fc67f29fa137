// Storefront HTTP client
//
// Wraps `reqwest::Client` with its own cookie jar, base-URL path
// construction, and status checking. Endpoint methods live in `pages.rs`
// and `auth.rs` as inherent impls to keep this module focused on
// transport mechanics.

use std::fmt;
use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Name of the cookie the storefront issues on login.
pub const SESSION_COOKIE: &str = "BSESS";

/// Raw HTTP client for one storefront session.
///
/// Each instance owns a private cookie jar, so two clients never share
/// authentication state. Cloning is cheap and shares the jar.
#[derive(Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    base_url: Url,
    cookie_jar: Arc<Jar>,
}

impl SiteClient {
    /// Create a client with a fresh, empty cookie jar.
    ///
    /// `base_url` is the storefront root including any front-controller
    /// path (e.g. `https://host/index.php`); page paths are appended to it
    /// verbatim.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let cookie_jar = Arc::new(Jar::default());
        let http = transport.build_client(&cookie_jar)?;
        Ok(Self {
            http,
            base_url,
            cookie_jar,
        })
    }

    /// The storefront base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── Cookie state ─────────────────────────────────────────────────

    /// The `Cookie` header value the jar would send to the storefront.
    pub fn cookie_header(&self) -> Option<String> {
        let cookies = self.cookie_jar.cookies(&self.base_url)?;
        cookies.to_str().ok().map(String::from)
    }

    /// `true` iff the jar holds at least one cookie for the storefront.
    ///
    /// Presence only: a stale cookie still reads as authenticated until a
    /// request against the server fails.
    pub fn is_authenticated(&self) -> bool {
        self.cookie_jar.cookies(&self.base_url).is_some()
    }

    /// Value of the [`SESSION_COOKIE`] held for the storefront.
    ///
    /// Falls back to the first cookie in the jar when the server names its
    /// session cookie differently.
    pub fn session_cookie(&self) -> Option<String> {
        let header = self.cookie_header()?;
        let pairs: Vec<(&str, &str)> = header
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .map(|(name, value)| (name.trim(), value.trim()))
            .collect();

        pairs
            .iter()
            .find(|(name, _)| *name == SESSION_COOKIE)
            .or_else(|| pairs.first())
            .map(|(_, value)| (*value).to_owned())
            .filter(|value| !value.is_empty())
    }

    /// Seed the jar with a previously issued session cookie.
    pub fn restore_session(&self, remote_session_id: &str) {
        debug!("restoring {SESSION_COOKIE} cookie for {}", self.base_url);
        let cookie = format!("{SESSION_COOKIE}={remote_session_id}; Path=/");
        self.cookie_jar.add_cookie_str(&cookie, &self.base_url);
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Build `{base}{path}`. The base may carry a path of its own, so this
    /// appends instead of using `Url::join`.
    pub(crate) fn page_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}")).map_err(Error::InvalidUrl)
    }

    /// GET a page and return its body, failing on any non-success status.
    pub(crate) async fn get_page(&self, path: &str) -> Result<String, Error> {
        let url = self.page_url(path)?;
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        resp.text().await.map_err(Error::Transport)
    }

    /// POST a form-encoded body. Status handling is left to the caller.
    pub(crate) async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<reqwest::Response, Error> {
        let url = self.page_url(path)?;
        debug!("POST {}", url);

        self.http
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(Error::Transport)
    }
}

impl fmt::Debug for SiteClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteClient")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
