//! Configuration management for the Supabase secrets CLI

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default Management API host
pub const DEFAULT_API_HOST: &str = "https://api.supabase.com";

/// Application configuration loaded from `~/.supabase/config.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Personal access token for the Management API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Custom API host for development/testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".supabase").join("config.yaml"))
    }

    /// Resolve the config path, using the override when provided.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// An explicitly requested path that does not exist is still an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;
        match Self::load_from(&resolved) {
            Err(crate::error::Error::Config(ConfigError::NotFound(_))) if path.is_none() => {
                log::debug!("No config file at {}, using defaults", resolved.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Merge runtime overrides (flags and environment) on top of the file.
    ///
    /// Precedence: CLI flag > environment variable > config file > default.
    pub fn with_overrides(mut self, access_token: Option<&str>, api_host: Option<&str>) -> Self {
        if let Some(token) = access_token {
            self.access_token = Some(token.to_string());
        }
        if let Some(host) = api_host {
            self.api_host = Some(host.to_string());
        }
        self
    }

    /// The API host to talk to.
    pub fn api_host(&self) -> &str {
        self.api_host.as_deref().unwrap_or(DEFAULT_API_HOST)
    }

    /// The access token, or an error if none was configured.
    pub fn require_access_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::MissingAccessToken.into())
    }
}
