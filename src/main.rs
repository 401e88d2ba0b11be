//! Endpoint health validator CLI.
//!
//! Probes the configured endpoints on one target host and prints a
//! pass/fail line per endpoint plus a summary block. The process exit code
//! is 0 only when every endpoint succeeded.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use upcheck::config::{load_config, ValidatorConfig};
use upcheck::health::aggregator::Aggregator;
use upcheck::health::report::EndpointSpec;
use upcheck::output::render_report;
use upcheck::probe::HttpProber;

#[derive(Parser)]
#[command(name = "upcheck")]
#[command(about = "Endpoint health validator for a single target host", long_about = None)]
struct Cli {
    /// Path to a TOML config file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the configured endpoints once
    Check {
        /// Target base URL
        #[arg(short, long)]
        url: Option<String>,

        /// Per-probe timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },
    /// Connectivity pre-check against the base URL, then the endpoint list
    Comprehensive {
        /// Target base URL
        #[arg(short, long)]
        url: Option<String>,

        /// Per-probe timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    upcheck::observability::logging::init("upcheck=info");

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => ValidatorConfig::default(),
    };

    let (url, timeout_secs, precheck) = match cli.command {
        Commands::Check { url, timeout } => (
            url.unwrap_or_else(|| config.target.base_url.clone()),
            timeout.unwrap_or(config.timeouts.probe_secs),
            false,
        ),
        Commands::Comprehensive { url, timeout } => (
            url.unwrap_or_else(|| config.target.base_url.clone()),
            timeout.unwrap_or(config.timeouts.comprehensive_secs),
            true,
        ),
    };
    let timeout = Duration::from_secs(timeout_secs);

    let specs: Vec<EndpointSpec> = config.endpoints.iter().map(EndpointSpec::from).collect();

    let aggregator = match Aggregator::new(&url, HttpProber::new(), timeout) {
        Ok(aggregator) => aggregator,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        %url,
        endpoints = specs.len(),
        timeout_secs,
        precheck,
        "starting validation run"
    );

    let report = if precheck {
        aggregator.run_with_precheck(&specs).await
    } else {
        aggregator.run(&specs).await
    };

    print!("{}", render_report(&report));

    if report.overall.exit_code() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
