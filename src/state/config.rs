//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/assetdesk/config.json`
//! - macOS: `~/Library/Application Support/assetdesk/config.json`
//! - Windows: `%APPDATA%/assetdesk/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::HttpConfig;
use crate::constants::{APP_NAME, CONFIG_FILE, DEFAULT_API_BASE_URL};

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// # Fields
///
/// * `api_base_url` - Base URL every endpoint path is joined onto
/// * `request_timeout_secs` - Optional request timeout; absent means requests
///   may wait indefinitely
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the node's REST API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or its JSON cannot be parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Returns a copy with the API base replaced, for session-only overrides.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        match self.request_timeout_secs {
            Some(secs) => HttpConfig::with_timeout(Duration::from_secs(secs)),
            None => HttpConfig::default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:10007/api/example/");
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.http_config().timeout, None);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AppConfig {
            api_base_url: "http://node-b:10010/api/example/".to_string(),
            request_timeout_secs: Some(15),
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_timeout_maps_to_http_config() {
        let config = AppConfig {
            request_timeout_secs: Some(5),
            ..AppConfig::default()
        };
        assert_eq!(config.http_config().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_api_override() {
        let config = AppConfig::default().with_api_base_url("http://other/api/");
        assert_eq!(config.api_base_url, "http://other/api/");
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }
}
