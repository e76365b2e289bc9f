//! Service layer for management API operations
//!
//! Services encapsulate the business logic for ruleset collection,
//! diagnostics capture and proxied commands.

pub mod diagnostics;
pub mod proxy;
pub mod rulesets;

pub use diagnostics::{diagnostics_filename, DiagnosticsService};
pub use proxy::ProxyService;
pub use rulesets::RulesetCollector;
