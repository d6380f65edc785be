use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sbom_license_checker::config::CheckOptions;

mod cli;
mod commands;

use cli::Cli;
use commands::{handle_check, CheckOutcome};

const EXIT_VIOLATIONS: u8 = 1;
const EXIT_INPUT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let mut options = match &cli.project_root {
        Some(root) => CheckOptions::new(root),
        None => CheckOptions::default(),
    };
    if let Some(config) = &cli.config {
        options = options.with_allow_list(config);
    }
    if let Some(sbom) = &cli.sbom {
        options = options.with_sbom(sbom);
    }

    match handle_check(&options, cli.quiet) {
        Ok(CheckOutcome::Clean) => ExitCode::SUCCESS,
        Ok(CheckOutcome::Violations(count)) => {
            debug!(count, "failing on license violations");
            ExitCode::from(EXIT_VIOLATIONS)
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::new(filter))
        .init();
}
