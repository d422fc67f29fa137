use thiserror::Error;

/// Top-level error type for the `sikopat-api` crate.
///
/// Covers every failure mode of talking to the storefront: transport,
/// HTTP status, login rejection, and page structure mismatches.
/// `sikopat-core` maps these into user-facing kinds.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The login form was rejected (wrong credentials, locked account, etc.)
    #[error("Login failed (HTTP {status})")]
    LoginFailed { status: u16 },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    // ── Pages ───────────────────────────────────────────────────────
    /// A page answered with a non-success status.
    #[error("Unexpected HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The page markup did not have the expected structure.
    #[error("Extraction failed: {message}")]
    Extraction { message: String },
}

impl Error {
    /// Returns `true` if this error came from the network layer rather
    /// than from the storefront's answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Client(_))
    }

    pub(crate) fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }
}
