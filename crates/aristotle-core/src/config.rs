//! Configuration management for the Aristotle client.
//!
//! Configuration is stored in TOML format and layered:
//!
//! 1. **Built-in defaults**: `http://localhost:8000`, 120 s request timeout
//! 2. **Config file**: `config.toml` in the platform config directory, or the
//!    file named by `ARISTOTLE_CONFIG`
//! 3. **Environment variables**: `ARISTOTLE_API_URL`, `ARISTOTLE_TIMEOUT_SECS`
//!
//! Command-line flags are applied on top by the CLI.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! base_url = "https://aristotle.example.org"
//! timeout_secs = 300
//! connect_timeout_secs = 10
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV_VAR: &str = "ARISTOTLE_CONFIG";
/// Environment variable overriding the service base URL.
pub const API_URL_ENV_VAR: &str = "ARISTOTLE_API_URL";
/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_ENV_VAR: &str = "ARISTOTLE_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Top-level client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Settings for reaching the research-assistant service
    #[serde(default)]
    pub api: ApiConfig,
}

/// How to reach the research-assistant service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/query`, `/research` and `/health` paths are joined onto.
    pub base_url: String,

    /// Overall timeout for single-payload requests (`/query`, `/health`).
    ///
    /// Research streams are long-running and only bounded by the connect
    /// timeout.
    pub timeout_secs: u64,

    /// Timeout for establishing the TCP/TLS connection.
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Request timeout as a `Duration`.
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout as a `Duration`.
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Config {
    /// Load configuration from the default location and apply environment
    /// overrides.
    ///
    /// A missing config file is not an error; the defaults are used instead.
    /// A file that exists but cannot be read or parsed is reported.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from an explicit file path (without env overrides).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Apply `ARISTOTLE_*` overrides using the supplied variable lookup.
    ///
    /// The lookup is injected so tests do not have to mutate the process
    /// environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            self.api.timeout_secs = raw.trim().parse().map_err(|_| {
                Error::Config(format!("{TIMEOUT_ENV_VAR} must be a whole number of seconds, got '{raw}'"))
            })?;
        }

        Ok(())
    }

    /// Path of the config file: `ARISTOTLE_CONFIG` if set, else
    /// `<config dir>/config.toml`.
    ///
    /// - Linux: `~/.config/aristotle/config.toml`
    /// - macOS: `~/Library/Application Support/org.aristotle.aristotle/config.toml`
    /// - Windows: `%APPDATA%\aristotle\aristotle\config\config.toml`
    pub fn config_path() -> Result<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV_VAR) {
            return Ok(PathBuf::from(explicit));
        }

        let project_dirs = directories::ProjectDirs::from("org", "aristotle", "aristotle")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
