//! Traffic filter ruleset collection
//!
//! Lists the rulesets associated with a deployment, then fetches each one in
//! listing order. The first failure aborts the whole collection.

use crate::api::{ApiContext, ApiRequest, ApiTransport};
use crate::domain::{format_rulesets, DeploymentId, RulesetDetails, RulesetList};
use crate::error::ApiError;

/// Service collecting traffic filter rulesets for a deployment
pub struct RulesetCollector<'a, T: ApiTransport> {
    transport: &'a T,
    context: &'a ApiContext,
}

impl<'a, T: ApiTransport> RulesetCollector<'a, T> {
    /// Create a collector
    pub fn new(transport: &'a T, context: &'a ApiContext) -> Self {
        Self { transport, context }
    }

    /// Ids of the rulesets associated with `deployment`, in API order
    pub fn list(&self, deployment: &DeploymentId) -> Result<Vec<String>, ApiError> {
        let url = self.context.endpoints.deployment_rulesets(deployment);
        let request = ApiRequest::get(url, self.context.api_key());
        let list: RulesetList = self.transport.send_json(&request)?;
        log::debug!("Found {} ruleset(s)", list.rulesets.len());
        Ok(list.rulesets)
    }

    /// Fetch a single ruleset with its rules
    pub fn details(&self, ruleset_id: &str) -> Result<RulesetDetails, ApiError> {
        let url = self.context.endpoints.ruleset_details(ruleset_id);
        let request = ApiRequest::get(url, self.context.api_key());
        self.transport.send_json(&request)
    }

    /// Fetch the details of every ruleset associated with `deployment`
    pub fn collect(&self, deployment: &DeploymentId) -> Result<Vec<RulesetDetails>, ApiError> {
        let ids = self.list(deployment)?;

        let mut rulesets = Vec::with_capacity(ids.len());
        for id in &ids {
            rulesets.push(self.details(id)?);
        }

        Ok(rulesets)
    }

    /// Collect and render the plain-text ruleset report
    pub fn collect_report(&self, deployment: &DeploymentId) -> Result<String, ApiError> {
        let rulesets = self.collect(deployment)?;
        let report = format_rulesets(&rulesets);
        log::debug!("Ruleset output: {}", report);
        Ok(report)
    }
}
