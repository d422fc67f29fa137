// ── Core error types ──
//
// User-facing errors from sikopat-core. Callers never see raw reqwest or
// scraper failures: the `From<sikopat_api::Error>` impl folds every
// transport-layer error into one of the kinds below.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach storefront at {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Storefront answered HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    // ── Session errors ───────────────────────────────────────────────
    #[error("Login failed: {message}")]
    LoginFailed { message: String },

    #[error("Not logged in")]
    NotLoggedIn,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Unexpected page structure: {message}")]
    ExtractionFailed { message: String },

    #[error("No default payment method (none is named \"Credit\")")]
    NoDefaultPaymentMethod,

    // ── Local state errors ───────────────────────────────────────────
    #[error("Failed to write cache file {}: {source}", path.display())]
    PersistenceFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` for network-level failures (as opposed to the
    /// storefront answering with something unexpected).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns `true` if logging in again might resolve this error.
    pub fn needs_login(&self) -> bool {
        matches!(self, Self::NotLoggedIn | Self::LoginFailed { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<sikopat_api::Error> for CoreError {
    fn from(err: sikopat_api::Error) -> Self {
        match err {
            sikopat_api::Error::Transport(e) => CoreError::Transport {
                url: e
                    .url()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "<unknown>".into()),
                reason: e.to_string(),
            },
            sikopat_api::Error::Client(reason) => CoreError::Transport {
                url: "<none>".into(),
                reason,
            },
            sikopat_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            sikopat_api::Error::Status { status, url } => CoreError::HttpStatus { status, url },
            sikopat_api::Error::LoginFailed { status } => CoreError::LoginFailed {
                message: format!("credentials rejected (HTTP {status})"),
            },
            sikopat_api::Error::Extraction { message } => CoreError::ExtractionFailed { message },
        }
    }
}
