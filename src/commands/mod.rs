//! Command handlers
//!
//! Each command handler orchestrates the execution of one operating mode.
//! Diagnostics and traffic filter failures are logged and do not fail the
//! process; proxied command failures do.

pub mod diagnostics;
pub mod proxy;
pub mod traffic_filters;

pub use diagnostics::run_diagnostics;
pub use proxy::run_command;
pub use traffic_filters::run_traffic_filters;

use crate::api::{ApiContext, ApiTransport};
use crate::cli::args::{Cli, OutputFormat};
use crate::config::{redact, Config};
use crate::domain::{DeploymentId, Mode};
use crate::error::Result;

/// Inputs of one run that passed every startup check
#[derive(Debug)]
pub struct Invocation {
    pub context: ApiContext,
    pub mode: Mode,
    pub deployment: DeploymentId,
}

/// Run the startup checks, before any network call
///
/// Order: API key, deployment id presence, mode conflicts, deployment id
/// format, then the remaining configuration values.
pub fn prepare(cli: &Cli, config: &Config) -> Result<Invocation> {
    let api_key = config.api.require_key()?;
    log::debug!("ELASTIC_ESS_KEY: {}", redact(api_key));

    let raw_id = cli.deployment_id()?;
    let mode = cli.mode()?;
    let deployment = DeploymentId::new(raw_id)?;

    config.validate()?;
    log::debug!("API endpoint: {}", config.api.endpoint);

    Ok(Invocation {
        context: config.api.context()?,
        mode,
        deployment,
    })
}

/// Run the handler for `mode`
pub fn run_mode<T: ApiTransport>(
    transport: &T,
    context: &ApiContext,
    config: &Config,
    mode: &Mode,
    deployment: &DeploymentId,
    format: OutputFormat,
) -> Result<()> {
    log::debug!("Mode: {}", mode);
    match mode {
        Mode::Diagnostics => run_diagnostics(transport, context, &config.diagnostics, deployment),
        Mode::TrafficFilters => run_traffic_filters(transport, context, deployment, format),
        Mode::Command(path) => run_command(transport, context, deployment, path),
    }
}
