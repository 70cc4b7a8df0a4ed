//! Fixtures relay.
//!
//! ```text
//!   Client ──GET /api/fixtures?date&status──▶ relay ──GET /fixtures + auth headers──▶ Upstream API
//!   Client ◀──────── raw JSON body ────────── relay ◀─────────── raw JSON body ────── Upstream API
//! ```
//!
//! Startup order: parse CLI, load config (fatal if the env file is missing),
//! init logging, build server, bind listener, serve until SIGINT/SIGTERM.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;

use fixtures_relay::config::{load_config, RunMode};
use fixtures_relay::lifecycle::shutdown_signal;
use fixtures_relay::observability::init_logging;
use fixtures_relay::HttpServer;

#[derive(Parser)]
#[command(name = "fixtures-relay")]
#[command(about = "Relays fixture queries to the sports-data API", long_about = None)]
struct Cli {
    /// Env file holding API_SPORTS_KEY, API_SPORTS_BASE_URL, PORT and RELAY_MODE.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli.env_file) {
        Ok(config) => config,
        Err(e) => {
            init_logging(RunMode::default());
            tracing::error!(error = %e, "Error loading configuration");
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.mode);

    tracing::info!(
        env_file = %cli.env_file.display(),
        bind_address = %config.listener.bind_address,
        mode = %config.mode,
        "Configuration loaded"
    );

    match run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Error starting server");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: fixtures_relay::RelayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    server.run(listener, shutdown_signal()).await?;
    Ok(())
}
