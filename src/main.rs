//! predict - reversible capacity predictions for biomass hard carbon
//!
//! CLI binary that collects sample measurements, sends them to the remote
//! model and prints the predicted reversible capacity.

use anyhow::Result;
use capacity_predict::service::{ServiceConfig, parse_endpoint};
use capacity_predict::types::OutcomeState;
use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "predict")]
#[command(about = "Predict the reversible capacity of biomass-derived hard carbon")]
#[command(version)]
struct Cli {
    /// Model endpoint (defaults to $PREDICT_ENDPOINT, then the hosted model)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Give up on the request after this many seconds (default: wait)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict once from command-line values
    Submit {
        /// Biomass source, as listed by `predict options`
        #[arg(long)]
        biomass: String,

        /// Feature value as KEY=value (repeat for all eight keys)
        #[arg(short, long = "feature", value_name = "KEY=VALUE")]
        features: Vec<String>,

        /// Print the payload and outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List biomass sources and feature keys
    Options,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "capacity_predict={default_level},predict={default_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn service_config(endpoint: Option<&str>, timeout: Option<u64>) -> Result<ServiceConfig> {
    let mut config = ServiceConfig::from_env()?;
    if let Some(raw) = endpoint {
        config = config.with_endpoint(parse_endpoint(raw)?);
    }
    Ok(config.with_timeout(timeout.map(Duration::from_secs)))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        None => {
            // Default: interactive mode
            let config = service_config(cli.endpoint.as_deref(), cli.timeout)?;
            cli::run_interactive(config).await?;
        }
        Some(Commands::Submit {
            biomass,
            features,
            json,
        }) => {
            let config = service_config(cli.endpoint.as_deref(), cli.timeout)?;
            let outcome = cli::run_submit(config, &biomass, &features, json).await?;
            if matches!(outcome, OutcomeState::Failed(_)) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Options) => cli::run_options(),
    }

    Ok(ExitCode::SUCCESS)
}
