// ── Runtime configuration ──
//
// Describes *where* the storefront lives and *where* the cache file goes.
// The CLI builds a `SikopatConfig` and hands it in; core never reads
// config files.

use std::path::PathBuf;
use std::time::Duration;

use sikopat_api::TransportConfig;
use url::Url;

use crate::error::CoreError;

/// The public storefront.
pub const DEFAULT_BASE_URL: &str = "https://sikopat.xinix.co.id/index.php";

/// Configuration for one storefront + cache pairing.
#[derive(Debug, Clone)]
pub struct SikopatConfig {
    /// Storefront root, including the front-controller path.
    pub base_url: Url,
    /// Directory holding the cache file.
    pub data_dir: PathBuf,
    /// Cache file name inside `data_dir`.
    pub data_file: String,
    /// Request timeout. `None` keeps the HTTP stack's default.
    pub timeout: Option<Duration>,
}

impl SikopatConfig {
    /// Build a config from raw strings.
    ///
    /// Inputs are trimmed. An empty `data_file` means "derive it from the
    /// base URL" (see [`cache_file_name`]).
    pub fn new(
        base_url: &str,
        data_dir: impl Into<PathBuf>,
        data_file: Option<&str>,
    ) -> Result<Self, CoreError> {
        let raw_url = base_url.trim();
        if raw_url.is_empty() {
            return Err(CoreError::Config {
                message: "base URL must point at the storefront".into(),
            });
        }

        let base_url = Url::parse(raw_url).map_err(|e| CoreError::Config {
            message: format!("invalid base URL {raw_url:?}: {e}"),
        })?;

        let data_file = data_file
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| cache_file_name(raw_url), str::to_owned);

        Ok(Self {
            base_url,
            data_dir: data_dir.into(),
            data_file,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full path of the cache file.
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }

    /// Transport settings for every session client.
    pub fn transport(&self) -> TransportConfig {
        let transport = TransportConfig::default();
        match self.timeout {
            Some(timeout) => transport.with_timeout(timeout),
            None => transport,
        }
    }
}

/// Derive a cache file name from a base URL by replacing every `/`, `:`,
/// `.`, space and `_` with `-`.
pub fn cache_file_name(base_url: &str) -> String {
    base_url
        .chars()
        .map(|c| match c {
            '/' | ':' | '.' | ' ' | '_' => '-',
            other => other,
        })
        .collect()
}
