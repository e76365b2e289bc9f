//! Traffic filters command implementation
//!
//! Prints the rulesets associated with a deployment.

use crate::api::{ApiContext, ApiTransport};
use crate::cli::args::OutputFormat;
use crate::cli::output::{write_output, RulesetReport};
use crate::domain::DeploymentId;
use crate::error::Result;
use crate::services::RulesetCollector;

use std::io::{self, Write};

/// Execute the traffic filter listing
///
/// Collection failures are logged and nothing is printed.
pub fn run_traffic_filters<T: ApiTransport>(
    transport: &T,
    context: &ApiContext,
    deployment: &DeploymentId,
    format: OutputFormat,
) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_traffic_filters(&mut handle, transport, context, deployment, format)
}

/// Collect the rulesets and write them to `out` in the selected format
pub fn write_traffic_filters<W: Write, T: ApiTransport>(
    out: &mut W,
    transport: &T,
    context: &ApiContext,
    deployment: &DeploymentId,
    format: OutputFormat,
) -> Result<()> {
    log::info!("Collecting ruleset...");

    let collector = RulesetCollector::new(transport, context);
    match format {
        OutputFormat::Text => match collector.collect_report(deployment) {
            Ok(report) => {
                log::info!("Done");
                write!(out, "{}", report)?;
                out.flush()?;
            }
            Err(e) => log::error!("{}", e),
        },
        OutputFormat::Json => match collector.collect(deployment) {
            Ok(rulesets) => {
                log::info!("Done");
                write_output(out, &RulesetReport { rulesets }, format)?;
            }
            Err(e) => log::error!("{}", e),
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Endpoints;
    use crate::mock::MockTransport;

    const DETAILS: &str = r#"{"id":"r1","name":"office","type":"ip","include_by_default":false,"region":"eu-west-1","rules":[{"id":"x","source":"1.2.3.0/24"}]}"#;

    fn setup() -> (ApiContext, DeploymentId, MockTransport) {
        let ctx = ApiContext::new(Endpoints::new("api.test"), "secret");
        let deployment = DeploymentId::new("abcdef0123456789abcdef0123456789").unwrap();
        let mock = MockTransport::new()
            .with_response(ctx.endpoints.deployment_rulesets(&deployment), 200, r#"{"rulesets":["r1"]}"#)
            .with_response(ctx.endpoints.ruleset_details("r1"), 200, DETAILS);
        (ctx, deployment, mock)
    }

    #[test]
    fn test_text_output_is_collected_report() {
        let (ctx, deployment, mock) = setup();
        let mut buf = Vec::new();

        write_traffic_filters(&mut buf, &mock, &ctx, &deployment, OutputFormat::Text).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Ruleset ID: r1\nName: office\nType: ip\nInclude By Default: false\nRegion: eu-west-1\nRules:\n  - ID: x\n    Source: 1.2.3.0/24\n\n"
        );
    }

    #[test]
    fn test_json_output() {
        let (ctx, deployment, mock) = setup();
        let mut buf = Vec::new();

        write_traffic_filters(&mut buf, &mock, &ctx, &deployment, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["name"], "office");
    }

    #[test]
    fn test_failure_writes_nothing() {
        let ctx = ApiContext::new(Endpoints::new("api.test"), "secret");
        let deployment = DeploymentId::new("abcdef0123456789abcdef0123456789").unwrap();
        let mock = MockTransport::new().with_response(
            ctx.endpoints.deployment_rulesets(&deployment),
            200,
            "not json",
        );
        let mut buf = Vec::new();

        write_traffic_filters(&mut buf, &mock, &ctx, &deployment, OutputFormat::Text).unwrap();
        assert!(buf.is_empty());
    }
}
