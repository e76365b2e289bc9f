//! URL construction for the management API

use crate::domain::DeploymentId;
use std::fmt;

/// Management API host used when none is configured
pub const DEFAULT_API_ENDPOINT: &str = "api.elastic-cloud.com";

/// Elasticsearch resource a proxied command is routed through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyTarget {
    /// `main-elasticsearch`, the primary resource ref id
    MainElasticsearch,
    /// `elasticsearch`, used by older deployments
    Elasticsearch,
}

impl ProxyTarget {
    /// Resource ref id as it appears in the URL
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyTarget::MainElasticsearch => "main-elasticsearch",
            ProxyTarget::Elasticsearch => "elasticsearch",
        }
    }
}

impl fmt::Display for ProxyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds HTTPS URLs against a management API host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    host: String,
}

impl Endpoints {
    /// Create endpoints for `host` (no scheme, e.g. `api.elastic-cloud.com`)
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Configured host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Diagnostics capture for the main Elasticsearch resource
    pub fn diagnostics_capture(&self, deployment: &DeploymentId) -> String {
        format!(
            "https://{}/api/v1/deployments/{}/elasticsearch/_main/diagnostics/_capture",
            self.host, deployment
        )
    }

    /// Traffic filter rulesets associated with a deployment
    pub fn deployment_rulesets(&self, deployment: &DeploymentId) -> String {
        format!(
            "https://{}/api/v1/deployments/traffic-filter/associations/deployment/{}/rulesets",
            self.host, deployment
        )
    }

    /// A single ruleset, including its associations
    pub fn ruleset_details(&self, ruleset_id: &str) -> String {
        format!(
            "https://{}/api/v1/deployments/traffic-filter/rulesets/{}?include_associations=true",
            self.host, ruleset_id
        )
    }

    /// Elasticsearch proxy for `path`, which must start with `/`
    pub fn proxy(&self, deployment: &DeploymentId, target: ProxyTarget, path: &str) -> String {
        format!(
            "https://{}/api/v1/deployments/{}/elasticsearch/{}/proxy{}",
            self.host, deployment, target, path
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_ENDPOINT)
    }
}

/// Everything an API call needs besides the transport
#[derive(Clone)]
pub struct ApiContext {
    pub endpoints: Endpoints,
    api_key: String,
}

impl ApiContext {
    /// Create a context for `endpoints` authenticated with `api_key`
    pub fn new(endpoints: Endpoints, api_key: impl Into<String>) -> Self {
        Self {
            endpoints,
            api_key: api_key.into(),
        }
    }

    /// API key sent in the `Authorization` header
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiContext")
            .field("endpoints", &self.endpoints)
            .field("api_key", &"****")
            .finish()
    }
}
