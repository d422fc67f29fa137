//! Configuration for the sikopat CLI.
//!
//! A TOML file merged with `SIKOPAT_*` environment variables, plus the
//! translation to `sikopat_core::SikopatConfig`. Core never reads files;
//! the CLI loads through here and layers its own flags on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sikopat_core::{CoreError, DEFAULT_BASE_URL, SikopatConfig};

/// Overrides the data directory (token file and cache).
pub const DATA_DIR_ENV: &str = "SIKOPAT_DIR";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config ─────────────────────────────────────────────────────

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Storefront root, including the front controller.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Where the token file and cache live.
    pub data_dir: Option<PathBuf>,

    /// Cache file name; derived from `base_url` when unset.
    pub data_file: Option<String>,

    /// Request timeout in seconds; none by default.
    pub timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            data_dir: None,
            data_file: None,
            timeout: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

impl Config {
    /// The configured data dir, or the default one.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Translate into the runtime config core expects.
    pub fn to_sikopat_config(&self) -> Result<SikopatConfig, ConfigError> {
        let config = SikopatConfig::new(
            &self.base_url,
            self.resolved_data_dir(),
            self.data_file.as_deref(),
        )
        .map_err(|e| match e {
            CoreError::Config { message } => ConfigError::Validation {
                field: "base_url".into(),
                reason: message,
            },
            other => ConfigError::Validation {
                field: "base_url".into(),
                reason: other.to_string(),
            },
        })?;

        Ok(match self.timeout {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("id", "xinix", "sikopat")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || home_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// `$SIKOPAT_DIR`, else the platform data dir.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    project_dirs().map_or_else(home_fallback, |dirs| dirs.data_dir().to_path_buf())
}

fn home_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var_os("HOME").unwrap_or_else(|| ".".into()));
    p.push(".sikopat");
    p
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load the config from `path` merged with `SIKOPAT_*` variables.
/// A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SIKOPAT_").only(&["base_url", "data_dir", "data_file", "timeout"]))
        .extract()?;

    if config.base_url.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "base_url".into(),
            reason: "must not be empty".into(),
        });
    }
    Ok(config)
}

/// Load from the canonical config path.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

// ── Saving ──────────────────────────────────────────────────────────

/// Serialize `cfg` to TOML at `path`, creating parent directories.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Save to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}
