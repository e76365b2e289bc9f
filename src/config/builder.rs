//! Configuration builder
//!
//! Merges configuration from files, environment variables and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;
use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must be readable; default locations are optional.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.config.general.verbose = true;
        }
        self
    }

    /// Override the API host; empty values are ignored
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(e) = endpoint.filter(|e| !e.is_empty()) {
            self.config.api.endpoint = e;
        }
        self
    }

    /// Set the API key; empty values are ignored
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        if let Some(k) = key.filter(|k| !k.is_empty()) {
            self.config.api.api_key = Some(k);
        }
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, seconds: Option<u64>) -> Self {
        if let Some(s) = seconds {
            self.config.api.timeout_seconds = Some(s);
        }
        self
    }

    /// Override the diagnostics output directory
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(d) = dir {
            self.config.diagnostics.output_dir = d;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert!(!config.general.verbose);
        assert_eq!(config.api.endpoint, "api.elastic-cloud.com");
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_verbose(true)
            .with_endpoint(Some("api.example.test".to_string()))
            .with_api_key(Some("key".to_string()))
            .with_timeout(Some(10))
            .with_output_dir(Some(PathBuf::from("/tmp")))
            .build();

        assert!(config.general.verbose);
        assert_eq!(config.api.endpoint, "api.example.test");
        assert_eq!(config.api.api_key.as_deref(), Some("key"));
        assert_eq!(config.api.timeout_seconds, Some(10));
        assert_eq!(config.diagnostics.output_dir, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_empty_values_ignored() {
        let config = ConfigBuilder::new()
            .with_endpoint(Some(String::new()))
            .with_api_key(Some(String::new()))
            .build();

        assert_eq!(config.api.endpoint, "api.elastic-cloud.com");
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nendpoint = \"from.file\"\ntimeout_seconds = 3").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ConfigBuilder::new()
            .with_file(Some(&path))
            .unwrap()
            .with_endpoint(Some("from.cli".to_string()))
            .build();

        assert_eq!(config.api.endpoint, "from.cli");
        assert_eq!(config.api.timeout_seconds, Some(3));
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/ess.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
