//! ess - Elastic Cloud deployment management client
//!
//! A command-line tool for running proxied Elasticsearch commands, capturing
//! diagnostics bundles and listing traffic filter rulesets.

use clap::Parser;
use ess::api::EssClient;
use ess::cli::args::{generate_completions, Cli};
use ess::commands::{prepare, run_mode};
use ess::config::{Config, ConfigBuilder};
use ess::error::{ApiError, AppError, ValidationError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    let config = load_config(&cli);

    // Initialize logging
    let verbose = config.as_ref().map_or(cli.verbose, |c| c.general.verbose);
    init_logging(verbose);

    // Run the selected mode
    let result = config.and_then(|config| run(&cli, &config));

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "info,ess=debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose)
        .with_endpoint(cli.endpoint.clone())
        .with_api_key(cli.api_key.clone())
        .with_timeout(cli.timeout)
        .with_output_dir(cli.output_dir.clone())
        .build();

    Ok(config)
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let invocation = prepare(cli, config)?;
    let client = EssClient::new(config.api.timeout())?;

    run_mode(
        &client,
        &invocation.context,
        config,
        &invocation.mode,
        &invocation.deployment,
        cli.format,
    )
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Validation(ValidationError::MissingApiKey) => {
            eprintln!();
            eprintln!("Hint: Create an API key in the Elastic Cloud console and");
            eprintln!("      export it as ELASTIC_ESS_KEY.");
        }
        AppError::Validation(ValidationError::InvalidDeploymentId(_)) => {
            eprintln!();
            eprintln!("Hint: Deployment ids are 32 lowercase hexadecimal characters,");
            eprintln!("      as shown on the deployment page of the Cloud console.");
        }
        AppError::Api(ApiError::Transport { .. }) => {
            eprintln!();
            eprintln!("Hint: Check network connectivity and ELASTIC_ESS_APIENDPOINT.");
        }
        _ => {}
    }
}
