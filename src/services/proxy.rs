//! Proxied Elasticsearch command service
//!
//! Forwards a GET through the deployment's Elasticsearch proxy. When the
//! primary resource answers with `resource_not_found` anywhere in the body,
//! the command is sent once more through the secondary resource.

use crate::api::{ApiContext, ApiRequest, ApiResponse, ApiTransport, ProxyTarget};
use crate::domain::DeploymentId;
use crate::error::ApiError;

/// Body marker that triggers the fallback to the secondary resource
pub const NOT_FOUND_MARKER: &str = "resource_not_found";

/// Service running proxied Elasticsearch commands
pub struct ProxyService<'a, T: ApiTransport> {
    transport: &'a T,
    context: &'a ApiContext,
}

impl<'a, T: ApiTransport> ProxyService<'a, T> {
    /// Create a proxy service
    pub fn new(transport: &'a T, context: &'a ApiContext) -> Self {
        Self { transport, context }
    }

    /// Send `path` through a single proxy target, whatever the status
    pub fn send(
        &self,
        deployment: &DeploymentId,
        target: ProxyTarget,
        path: &str,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.context.endpoints.proxy(deployment, target, path);
        let request = ApiRequest::get(url, self.context.api_key()).management();
        let response = self.transport.send(&request)?;
        log::debug!("Response Body: {}", response.text());
        Ok(response)
    }

    /// Run `path` against the primary target, falling back once if needed
    ///
    /// Returns the raw body bytes, which need not be UTF-8.
    pub fn run(&self, deployment: &DeploymentId, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(deployment, ProxyTarget::MainElasticsearch, path)?;

        if response.text().contains(NOT_FOUND_MARKER) {
            log::debug!(
                "{} not found, retrying through {}",
                ProxyTarget::MainElasticsearch,
                ProxyTarget::Elasticsearch
            );
            return Ok(self.send(deployment, ProxyTarget::Elasticsearch, path)?.body);
        }

        Ok(response.body)
    }
}
