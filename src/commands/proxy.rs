//! Proxied command implementation
//!
//! Sends a GET to the deployment's Elasticsearch and prints the body.

use crate::api::{ApiContext, ApiTransport};
use crate::cli::output::print_response;
use crate::domain::DeploymentId;
use crate::error::Result;
use crate::services::ProxyService;

/// Execute a proxied Elasticsearch command
pub fn run_command<T: ApiTransport>(
    transport: &T,
    context: &ApiContext,
    deployment: &DeploymentId,
    path: &str,
) -> Result<()> {
    let body = ProxyService::new(transport, context).run(deployment, path)?;
    print_response(&body)?;
    Ok(())
}
