//! Operating mode selection
//!
//! Exactly one of diagnostics capture, traffic filter listing or a proxied
//! Elasticsearch command runs per invocation.

use crate::error::ValidationError;
use std::fmt;

/// Path proxied when command mode is implied without one
pub const DEFAULT_COMMAND_PATH: &str = "/";

/// Operation selected from the command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Capture a diagnostics bundle to disk
    Diagnostics,
    /// Print the traffic filter rulesets associated with the deployment
    TrafficFilters,
    /// Forward a GET to the deployment's Elasticsearch proxy
    Command(String),
}

impl Mode {
    /// Resolve the mode from the `-d`/`-t` flags and the optional command path
    ///
    /// An empty command path counts as absent.
    pub fn resolve(
        diagnostics: bool,
        traffic_filters: bool,
        command: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let command = command.filter(|c| !c.is_empty());

        if command.is_some() && (diagnostics || traffic_filters) {
            return Err(ValidationError::ConflictingModes(
                "Command and Diagnostics / Traffic Filters modes are mutually exclusive."
                    .to_string(),
            ));
        }

        match (diagnostics, traffic_filters) {
            (true, true) => Err(ValidationError::ConflictingModes(
                "Diagnostics and Traffic Filters modes are mutually exclusive.".to_string(),
            )),
            (true, false) => Ok(Mode::Diagnostics),
            (false, true) => Ok(Mode::TrafficFilters),
            (false, false) => Ok(Mode::Command(normalize_command_path(
                command.unwrap_or(DEFAULT_COMMAND_PATH),
            ))),
        }
    }
}

/// Ensure a proxied path starts with `/`
pub fn normalize_command_path(path: &str) -> String {
    if path.is_empty() {
        return DEFAULT_COMMAND_PATH.to_string();
    }
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Diagnostics => write!(f, "diagnostics"),
            Mode::TrafficFilters => write!(f, "traffic filters"),
            Mode::Command(path) => write!(f, "command {}", path),
        }
    }
}
