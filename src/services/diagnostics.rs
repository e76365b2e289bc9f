//! Diagnostics capture service
//!
//! Asks the API to generate a diagnostics bundle and saves it as a zip file.

use crate::api::{ApiContext, ApiRequest, ApiTransport};
use crate::domain::DeploymentId;
use crate::error::{ApiError, ServiceError};

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Timestamp layout used in bundle file names, e.g. `2024-Mar-05--14_03_59`
pub const TIMESTAMP_FORMAT: &str = "%Y-%b-%d--%H_%M_%S";

/// File name for a bundle captured at `at`
pub fn diagnostics_filename<Tz>(deployment: &DeploymentId, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "diagnostic-{}-{}.zip",
        deployment.short(),
        at.format(TIMESTAMP_FORMAT)
    )
}

/// Service capturing diagnostics bundles
pub struct DiagnosticsService<'a, T: ApiTransport> {
    transport: &'a T,
    context: &'a ApiContext,
    output_dir: PathBuf,
}

impl<'a, T: ApiTransport> DiagnosticsService<'a, T> {
    /// Create a service writing bundles into `output_dir`
    pub fn new(transport: &'a T, context: &'a ApiContext, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            context,
            output_dir: output_dir.into(),
        }
    }

    /// Directory bundles are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Capture a bundle and save it, returning the written path
    ///
    /// Only status 200 is accepted; nothing is written otherwise.
    pub fn capture<Tz>(
        &self,
        deployment: &DeploymentId,
        now: &DateTime<Tz>,
    ) -> Result<PathBuf, ServiceError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let url = self.context.endpoints.diagnostics_capture(deployment);
        let path = self.output_dir.join(diagnostics_filename(deployment, now));
        log::debug!("diagFile: {}", path.display());

        let response = self
            .transport
            .send(&ApiRequest::post(url.clone(), self.context.api_key()))?;

        if !response.is_ok() {
            return Err(ApiError::UnexpectedStatus {
                url,
                status: response.status,
            }
            .into());
        }

        std::fs::write(&path, &response.body)?;
        log::debug!("Wrote {} bytes", response.body.len());

        Ok(path)
    }
}
