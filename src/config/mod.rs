//! Configuration system
//!
//! Handles TOML config file parsing and merging with environment variables
//! and CLI arguments.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::api::{ApiContext, Endpoints, DEFAULT_API_ENDPOINT};
use crate::error::{ConfigError, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Management API settings
    pub api: ApiConfig,
    /// Diagnostics capture settings
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Check values that would otherwise only fail at request time
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.api.endpoint;
        if endpoint.is_empty() || endpoint.contains("://") {
            return Err(ConfigError::InvalidValue {
                key: "api.endpoint".to_string(),
                message: format!("expected a host name without scheme, got '{}'", endpoint),
            });
        }
        Ok(())
    }
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable debug logging
    pub verbose: bool,
}

/// Management API configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API host, without scheme
    pub endpoint: String,
    /// Per-request timeout in seconds; unset means no timeout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    /// API key, only ever taken from the environment or the command line
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_seconds: None,
            api_key: None,
        }
    }
}

impl ApiConfig {
    /// Configured timeout; zero disables it
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|&s| s > 0)
            .map(Duration::from_secs)
    }

    /// The API key, or a validation error when missing
    pub fn require_key(&self) -> Result<&str, ValidationError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ValidationError::MissingApiKey)
    }

    /// Build the context shared by every API call
    pub fn context(&self) -> Result<ApiContext, ValidationError> {
        let key = self.require_key()?;
        Ok(ApiContext::new(Endpoints::new(self.endpoint.clone()), key))
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("endpoint", &self.endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("api_key", &self.api_key.as_deref().map(redact))
            .finish()
    }
}

/// Diagnostics capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Directory bundles are saved to
    pub output_dir: PathBuf,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Mask a secret for logging, keeping only its first four characters
pub fn redact(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "****".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{}****", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.endpoint, "api.elastic-cloud.com");
        assert_eq!(config.api.timeout(), None);
        assert_eq!(config.diagnostics.output_dir, PathBuf::from("."));
        assert!(!config.general.verbose);
    }

    #[test]
    fn test_validate_endpoint() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.api.endpoint = "api.example.test:9243".to_string();
        assert!(config.validate().is_ok());

        config.api.endpoint = "https://api.elastic-cloud.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        // Path prefixes are kept, as with a reverse proxy in front of the API
        config.api.endpoint = "proxy.corp/ess".to_string();
        assert!(config.validate().is_ok());

        config.api.endpoint = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_zero_disables() {
        let api = ApiConfig {
            timeout_seconds: Some(0),
            ..ApiConfig::default()
        };
        assert_eq!(api.timeout(), None);

        let api = ApiConfig {
            timeout_seconds: Some(30),
            ..ApiConfig::default()
        };
        assert_eq!(api.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_require_key() {
        let mut api = ApiConfig::default();
        assert_eq!(api.require_key(), Err(ValidationError::MissingApiKey));

        api.api_key = Some(String::new());
        assert_eq!(api.require_key(), Err(ValidationError::MissingApiKey));

        api.api_key = Some("abc".to_string());
        assert_eq!(api.require_key(), Ok("abc"));
    }

    #[test]
    fn test_context_uses_endpoint() {
        let api = ApiConfig {
            endpoint: "api.example.test".to_string(),
            api_key: Some("k".to_string()),
            ..ApiConfig::default()
        };
        let ctx = api.context().unwrap();
        assert_eq!(ctx.endpoints.host(), "api.example.test");
        assert_eq!(ctx.api_key(), "k");
    }

    #[test]
    fn test_redact() {
        assert_eq!(redact("short"), "****");
        assert_eq!(redact("abcdefghijkl"), "abcd****");
    }

    #[test]
    fn test_debug_redacts_key() {
        let api = ApiConfig {
            api_key: Some("abcdefghijklmnop".to_string()),
            ..ApiConfig::default()
        };
        let text = format!("{:?}", api);
        assert!(!text.contains("abcdefghijklmnop"));
        assert!(text.contains("abcd****"));
    }

    #[test]
    fn test_key_never_serialized() {
        let mut config = Config::default();
        config.api.api_key = Some("secret-key-value".to_string());
        let text = toml::to_string(&config).unwrap();
        assert!(!text.contains("secret-key-value"));
    }
}
