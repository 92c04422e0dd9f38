//! CVM inventory lookup - main entry point.

mod config;
mod error;

use crate::config::{Cli, Config};
use crate::error::AppResult;
use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::Read;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        // Usage errors share the lookup-failure exit status
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Every failure collapses to a silent exit 1; the cause only
            // reaches stderr when the log level is raised
            debug!("Lookup failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AppResult<String> {
    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config.log_level);

    let mut payload = String::new();
    std::io::stdin().read_to_string(&mut payload)?;

    let summary = cvm_lookup::find_cvm(&payload, &cli.name)?;
    Ok(serde_json::to_string(&summary)?)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
