//! ess - Elastic Cloud deployment management client library
//!
//! This library provides the core functionality for proxied Elasticsearch
//! commands, diagnostics capture and traffic filter reports via the
//! deployment management API.
//!
//! # Modules
//!
//! - [`api`]: HTTP abstraction layer and URL construction
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`services`]: Business logic services

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
