//! Brasil Relay
//!
//! A REST relay over the BrasilAPI public-data service, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                  RELAY                       │
//!   Client Request    │  ┌────────┐   ┌──────────┐   ┌───────────┐  │
//!   ──────────────────┼─▶│  http  │──▶│  relay   │──▶│ upstream  │──┼──▶ BrasilAPI
//!                     │  │ server │   │ validate │   │  client   │  │
//!                     │  └────────┘   └──────────┘   └─────┬─────┘  │
//!   Client Response   │  ┌────────┐                        │        │
//!   ◀─────────────────┼──│envelope│◀───── shape (top 5) ◀──┘        │
//!                     │  └────────┘                                 │
//!                     │  config · observability · lifecycle         │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use brasil_relay::config::{load_config, RelayConfig};
use brasil_relay::observability::{logging, metrics};
use brasil_relay::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "brasil-relay")]
#[command(about = "REST relay over the BrasilAPI public-data service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!("brasil-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::warn!(error = %e, "Failed to start metrics exporter, continuing without metrics");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
