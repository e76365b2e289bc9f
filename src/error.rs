//! Unified error types for ess
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Precondition failure detected before any network call
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Error from the deployment management API
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from argument and environment validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Deployment id is not 32 lowercase hex characters
    #[error("Invalid deployment_id format: {0}")]
    InvalidDeploymentId(String),

    /// No deployment id was given on the command line
    #[error("Usage: ess [-v] [-d|-t] <deployment_id> [Elasticsearch GET command]")]
    MissingDeploymentId,

    /// ELASTIC_ESS_KEY is unset or empty
    #[error("ELASTIC_ESS_KEY environment variable not set")]
    MissingApiKey,

    /// More than one operating mode was requested
    #[error("{0}")]
    ConflictingModes(String),
}

/// Errors from calls to the deployment management API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, DNS or TLS failure, or a body that could not be read
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The endpoint answered with a status the operation does not accept
    #[error("unexpected return code: {status}")]
    UnexpectedStatus { url: String, status: u16 },

    /// Response body did not match the expected JSON shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Errors from service operations
#[derive(Error, Debug)]
pub enum ServiceError {
    /// API call failed
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Writing the result to disk failed
    #[error("failed to save output: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Api(e) => AppError::Api(e),
            ServiceError::Io(e) => AppError::Io(e),
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
