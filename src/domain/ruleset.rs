//! Traffic filter ruleset domain types
//!
//! Shapes of the traffic filter API responses and their plain-text report
//! rendering. Missing or `null` string fields decode as empty strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Response of the deployment ruleset association listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetList {
    /// Ruleset ids, in the order the API returned them
    #[serde(default, deserialize_with = "null_as_default")]
    pub rulesets: Vec<String>,
}

/// A single traffic filter ruleset with its rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Ruleset type (`ip`, `vpce`, `azure_private_endpoint`, ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub include_by_default: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: Vec<Rule>,
    /// Deployments the ruleset is attached to (JSON output only)
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub associations: Vec<Association>,
}

/// A single network access rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_endpoint_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_endpoint_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_id: Option<String>,
}

/// Link between a ruleset and an entity such as a deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Rule {
    /// Create a rule with only an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the source CIDR or address
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Optional fields with their report labels, in report order
    fn labelled_fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("Source", self.source.as_deref()),
            ("Azure Endpoint Name", self.azure_endpoint_name.as_deref()),
            ("Azure Endpoint Guid", self.azure_endpoint_guid.as_deref()),
            ("Region", self.region.as_deref()),
            ("Link ID", self.link_id.as_deref()),
        ]
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  - ID: {}", self.id)?;
        for (label, value) in self.labelled_fields() {
            match value {
                Some(v) if !v.is_empty() => writeln!(f, "    {}: {}", label, v)?,
                _ => {}
            }
        }
        Ok(())
    }
}

impl fmt::Display for RulesetDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ruleset ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Type: {}", self.kind)?;
        writeln!(f, "Include By Default: {}", self.include_by_default)?;
        writeln!(f, "Region: {}", self.region)?;
        writeln!(f, "Rules:")?;
        for rule in &self.rules {
            write!(f, "{}", rule)?;
        }
        writeln!(f)
    }
}

/// Render rulesets as the plain-text report, in input order
pub fn format_rulesets(rulesets: &[RulesetDetails]) -> String {
    rulesets.iter().map(ToString::to_string).collect()
}
