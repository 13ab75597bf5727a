//! Configuration management for authgate

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::client::authority::DEFAULT_AUTHORITY_URL;
use crate::error::{ConfigError, Result};
use crate::session::guard::DEFAULT_LOGIN_PATH;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Base URL of the authority
    #[serde(default = "default_authority_url")]
    pub authority_url: String,

    /// Per-request timeout for authority calls, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Where denied requests are sent
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Session artifact file (defaults to ~/.authgate/session)
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

fn default_authority_url() -> String {
    DEFAULT_AUTHORITY_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            authority_url: default_authority_url(),
            timeout_secs: default_timeout_secs(),
            login_path: default_login_path(),
            session_file: None,
        }
    }
}

impl Config {
    fn home_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".authgate"))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        config.validate()?;
        Ok(config)
    }

    /// Apply a runtime authority override (flag or env), then re-validate
    pub fn with_authority(mut self, authority: Option<&str>) -> Result<Self> {
        if let Some(url) = authority {
            self.authority_url = url.to_string();
        }
        self.validate()?;
        Ok(self)
    }

    /// Check the values a client cannot work without
    pub fn validate(&self) -> Result<()> {
        let url = self.authority_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Invalid("authority_url is empty".to_string()).into());
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "authority_url must start with http:// or https://, got '{}'",
                url
            ))
            .into());
        }
        if self.timeout_secs == 0 {
            return Err(
                ConfigError::Invalid("timeout_secs must be greater than zero".to_string()).into(),
            );
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Session artifact file, defaulting to ~/.authgate/session
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.session_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::home_dir()?.join("session")),
        }
    }
}
