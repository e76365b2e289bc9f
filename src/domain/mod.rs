//! Domain models with validation
//!
//! Pure types shared by the API layer, services and output formatting.

pub mod deployment;
pub mod mode;
pub mod ruleset;

pub use deployment::DeploymentId;
pub use mode::Mode;
pub use ruleset::{format_rulesets, Association, Rule, RulesetDetails, RulesetList};
