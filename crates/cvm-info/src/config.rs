//! CLI arguments and environment configuration.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Look up an active CVM in a cloud inventory listing read from stdin"
)]
pub struct Cli {
    /// Name of the CVM (or its hosted app) to look up
    pub name: String,
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("CVM_INFO")
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

fn default_log_level() -> String {
    "warn".into()
}
