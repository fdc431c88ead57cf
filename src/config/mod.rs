//! Configuration management for apipage

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host prefixed to every endpoint path in example requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Security scheme whose scopes are listed on each page
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,

    /// Placeholder shown in the example Authorization header
    #[serde(default = "default_auth_token_placeholder")]
    pub auth_token_placeholder: String,

    /// Link target for the authentication docs page
    #[serde(default = "default_auth_docs_link")]
    pub auth_docs_link: String,

    /// Site title appended to page titles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,

    /// Run the JSON highlighter on payloads and schemas
    #[serde(default = "default_highlight")]
    pub highlight: bool,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

fn default_base_url() -> String {
    "https://sentry.io".to_string()
}

fn default_auth_scheme() -> String {
    "auth_token".to_string()
}

fn default_auth_token_placeholder() -> String {
    "<auth_token>".to_string()
}

fn default_auth_docs_link() -> String {
    "/api/auth".to_string()
}

fn default_highlight() -> bool {
    true
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".apipage").join("config.yaml"))
    }

    /// Resolve the config path from an explicit override or the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// file at an explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(default)
                } else {
                    log::debug!("No config at {}, using defaults", default.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;
        Ok(())
    }

    /// Validate that configured values are usable
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".to_string()).into());
        }
        if self.auth_scheme.trim().is_empty() {
            return Err(ConfigError::Invalid("auth_scheme must not be empty".to_string()).into());
        }
        Ok(())
    }

    /// Apply the `--base-url` override, trimming a trailing slash
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.to_string();
        }
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_scheme: default_auth_scheme(),
            auth_token_placeholder: default_auth_token_placeholder(),
            auth_docs_link: default_auth_docs_link(),
            site_title: None,
            highlight: default_highlight(),
            preferences: Preferences::default(),
        }
    }
}
