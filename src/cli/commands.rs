//! CLI command implementations
//!
//! `serve` resolves the configuration, builds the record store and runs the
//! HTTP server until the process is stopped. `check-config` stops after
//! resolution and prints the result.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::rest_api::MovieHandlers;
use crate::store::{DynamoOptions, DynamoStore, InMemoryStore, RecordStore, DEFAULT_TABLE_NAME};

use super::args::{Command, Settings, StoreBackend};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Record store settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// Record store section of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend kind (default "dynamodb")
    #[serde(default)]
    pub backend: StoreBackend,

    /// Table holding movie records (default "MovieMaster")
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// AWS region (optional, default: environment)
    #[serde(default)]
    pub region: Option<String>,

    /// Endpoint override (optional, for DynamoDB Local)
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            table_name: default_table_name(),
            region: None,
            endpoint_url: None,
        }
    }
}

impl Config {
    /// Load configuration from file. A missing file yields the defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config '{}': {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Load from the settings' file, apply its overrides and validate
    pub fn resolve(settings: &Settings) -> CliResult<Self> {
        let mut config = Self::load(&settings.config)?;
        config.apply_overrides(settings);
        config.validate()?;
        Ok(config)
    }

    /// Command-line values win over file values
    pub fn apply_overrides(&mut self, settings: &Settings) {
        if let Some(host) = &settings.host {
            self.server.host = host.clone();
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(backend) = settings.store {
            self.store.backend = backend;
        }
        if let Some(table) = &settings.table {
            self.store.table_name = table.clone();
        }
        if let Some(region) = &settings.region {
            self.store.region = Some(region.clone());
        }
        if let Some(endpoint) = &settings.endpoint_url {
            self.store.endpoint_url = Some(endpoint.clone());
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("host cannot be empty"));
        }

        if self.store.backend == StoreBackend::Dynamodb && self.store.table_name.trim().is_empty() {
            return Err(CliError::config_error("table_name cannot be empty"));
        }

        Ok(())
    }
}

/// Build the configured record store
pub async fn build_store(config: &StoreConfig) -> CliResult<Arc<dyn RecordStore>> {
    match config.backend {
        StoreBackend::Memory => {
            info!("using in-memory record store");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StoreBackend::Dynamodb => {
            let options = DynamoOptions {
                region: config.region.clone(),
                endpoint_url: config.endpoint_url.clone(),
            };
            let store = DynamoStore::new(config.table_name.clone(), &options).await?;
            info!(table = store.table_name(), "using DynamoDB record store");
            Ok(Arc::new(store))
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { settings } => serve(&settings),
        Command::CheckConfig { settings } => check_config(&settings),
    }
}

/// Run the HTTP server until the process is stopped
pub fn serve(settings: &Settings) -> CliResult<()> {
    init_tracing();
    let config = Config::resolve(settings)?;

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = build_store(&config.store).await?;
        let server = HttpServer::with_config(config.server.clone(), MovieHandlers::new(store));

        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the resolved configuration as JSON
pub fn check_config(settings: &Settings) -> CliResult<()> {
    let config = Config::resolve(settings)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
