//! Main entry point for the application.
//!
//! This module loads environment variables, initializes logging, resolves the
//! functions configuration and starts the HTTP server hosting the functions.
//!
//! Configuration is resolved in three layers, later ones winning:
//! - Built-in defaults (`helloWorld` and `myFunctionName`, 10 instances)
//! - An optional YAML or TOML file given with `--config`
//! - Environment variables and command line flags

mod api;
mod cli;
mod config;
mod constants;
mod errors;
mod utils;

use clap::Parser;
use config::FunctionsConfig;
use std::process::ExitCode;
use tracing::{debug, error};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Load environment variables
/// 2. Parse CLI arguments
/// 3. Initialize logging system
/// 4. Load and validate the functions configuration
/// 5. Serve until shutdown
#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_format, cli.log_to_file);

    if let Err(e) = dotenv {
        debug!("No .env file loaded: {}", e);
    }

    let mut config = match cli.config.as_deref() {
        Some(path) => match config::load_functions_config(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => FunctionsConfig::default(),
    };
    config.apply_overrides(cli.host, cli.port, cli.max_instances);

    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    match api::server::launch_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to start server: {}", e);
            ExitCode::FAILURE
        }
    }
}
