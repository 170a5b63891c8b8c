//! CLI module for moviedb
//!
//! Provides command-line interface for:
//! - serve: Resolve configuration and run the HTTP server
//! - check-config: Print the resolved configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, Settings, StoreBackend};
pub use commands::{
    build_store, check_config, init_tracing, run, run_command, serve, Config, StoreConfig,
};
pub use errors::{CliError, CliErrorCode, CliResult};
