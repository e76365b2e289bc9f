//! Diagnostics command implementation
//!
//! Captures a diagnostics bundle into the configured output directory.

use crate::api::{ApiContext, ApiTransport};
use crate::config::DiagnosticsConfig;
use crate::domain::DeploymentId;
use crate::error::Result;
use crate::services::DiagnosticsService;

use chrono::Local;

/// Execute the diagnostics capture
///
/// Capture failures are logged, not returned.
pub fn run_diagnostics<T: ApiTransport>(
    transport: &T,
    context: &ApiContext,
    config: &DiagnosticsConfig,
    deployment: &DeploymentId,
) -> Result<()> {
    log::info!("Collecting diagnostics...");

    let service = DiagnosticsService::new(transport, context, config.output_dir.clone());
    match service.capture(deployment, &Local::now()) {
        Ok(path) => {
            log::info!("Done");
            log::info!("Diagnostics saved in {}", path.display());
        }
        Err(e) => log::error!("{}", e),
    }

    Ok(())
}
