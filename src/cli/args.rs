//! CLI argument definitions using clap
//!
//! Commands:
//! - moviedb serve [--config <path>] [overrides...]
//! - moviedb check-config [--config <path>] [overrides...]

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// moviedb - movie catalogue REST service
#[derive(Parser, Debug)]
#[command(name = "moviedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        settings: Settings,
    },

    /// Resolve the configuration, print it as JSON and exit
    CheckConfig {
        #[command(flatten)]
        settings: Settings,
    },
}

/// Configuration file plus per-field overrides
#[derive(Args, Debug, Clone, Default)]
pub struct Settings {
    /// Path to configuration file (missing file means defaults)
    #[arg(long, default_value = "./moviedb.json")]
    pub config: PathBuf,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,

    /// Record store backend
    #[arg(long, value_enum)]
    pub store: Option<StoreBackend>,

    /// DynamoDB table name
    #[arg(long)]
    pub table: Option<String>,

    /// AWS region for DynamoDB
    #[arg(long)]
    pub region: Option<String>,

    /// DynamoDB endpoint override (e.g. DynamoDB Local)
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

/// Where records are kept
#[derive(
    ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// DynamoDB table
    #[default]
    Dynamodb,
    /// Process-local map, lost on exit
    Memory,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
