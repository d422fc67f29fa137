//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use sikopat_config::ConfigError;
use sikopat_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the storefront at {url}")]
    #[diagnostic(
        code(sikopat::connection_failed),
        help(
            "{reason}\n\
             Check your network, or point --url at another storefront."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Storefront answered HTTP {status} for {url}")]
    #[diagnostic(code(sikopat::http_status))]
    HttpStatus { status: u16, url: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Login failed: {message}")]
    #[diagnostic(
        code(sikopat::login_failed),
        help("Check your username and password, then run: sikopat login")
    )]
    LoginFailed { message: String },

    #[error("Not logged in")]
    #[diagnostic(code(sikopat::not_logged_in), help("Run: sikopat login"))]
    NotLoggedIn,

    // ── Storefront data ──────────────────────────────────────────────
    #[error("Unexpected page from the storefront: {message}")]
    #[diagnostic(
        code(sikopat::page_changed),
        help(
            "The session may have expired (try: sikopat login),\n\
             or the storefront layout changed."
        )
    )]
    PageChanged { message: String },

    #[error("No default payment method")]
    #[diagnostic(
        code(sikopat::no_default_payment),
        help("Purchases use the method named \"Credit\". Run: sikopat methods")
    )]
    NoDefaultPaymentMethod,

    #[error("No product matches '{filter}'")]
    #[diagnostic(code(sikopat::not_found), help("Run: sikopat search to see available products"))]
    NoProductMatch { filter: String },

    #[error("{count} products match '{filter}'")]
    #[diagnostic(
        code(sikopat::ambiguous),
        help("Narrow the filter until exactly one product matches.")
    )]
    AmbiguousProduct { filter: String, count: usize },

    // ── Local state ──────────────────────────────────────────────────
    #[error("Cannot write {}", path.display())]
    #[diagnostic(code(sikopat::cache))]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(sikopat::config))]
    Config(#[from] ConfigError),

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(sikopat::validation))]
    Validation { field: String, reason: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("'{action}' requires confirmation")]
    #[diagnostic(
        code(sikopat::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Cannot render JSON: {0}")]
    #[diagnostic(code(sikopat::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::LoginFailed { .. } | Self::NotLoggedIn => exit_code::AUTH,
            Self::NoProductMatch { .. } | Self::NoDefaultPaymentMethod => exit_code::NOT_FOUND,
            Self::AmbiguousProduct { .. }
            | Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Transport { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::HttpStatus { status, url } => CliError::HttpStatus { status, url },
            CoreError::LoginFailed { message } => CliError::LoginFailed { message },
            CoreError::NotLoggedIn => CliError::NotLoggedIn,
            CoreError::ExtractionFailed { message } => CliError::PageChanged { message },
            CoreError::NoDefaultPaymentMethod => CliError::NoDefaultPaymentMethod,
            CoreError::PersistenceFailed { path, source } => CliError::Cache { path, source },
            CoreError::Config { message } => CliError::Validation {
                field: "url".into(),
                reason: message,
            },
        }
    }
}
