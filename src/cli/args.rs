//! CLI argument definitions using clap derive
//!
//! `ess [-v] [-d|-t] <deployment_id> [proxied_http_path]`

use crate::domain::Mode;
use crate::error::ValidationError;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Elastic Cloud deployment client
///
/// Runs a GET against a deployment's Elasticsearch through the management
/// API proxy, captures a diagnostics bundle (-d) or lists the deployment's
/// traffic filter rulesets (-t).
#[derive(Parser, Debug)]
#[command(name = "ess")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Diagnostics mode: capture a diagnostics bundle
    #[arg(short = 'd', long = "diagnostics")]
    pub diagnostics: bool,

    /// Traffic filters mode: list associated rulesets and their rules
    #[arg(short = 't', long = "traffic-filters")]
    pub traffic_filters: bool,

    /// Output format for the traffic filter report
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, env = "ESS_CONFIG")]
    pub config: Option<String>,

    /// Management API key
    #[arg(long, env = "ELASTIC_ESS_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Management API host
    #[arg(long, env = "ELASTIC_ESS_APIENDPOINT")]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds (0 disables it)
    #[arg(long, env = "ELASTIC_ESS_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Directory diagnostics bundles are saved to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Deployment id (32 lowercase hex characters)
    pub deployment_id: Option<String>,

    /// Elasticsearch path to GET in command mode (default: /)
    pub command: Option<String>,
}

impl Cli {
    /// Deployment id argument
    ///
    /// Checked after the API key, so clap leaves it optional.
    pub fn deployment_id(&self) -> Result<&str, ValidationError> {
        self.deployment_id
            .as_deref()
            .ok_or(ValidationError::MissingDeploymentId)
    }

    /// Operating mode selected by the flags and the command argument
    pub fn mode(&self) -> Result<Mode, ValidationError> {
        Mode::resolve(
            self.diagnostics,
            self.traffic_filters,
            self.command.as_deref(),
        )
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
