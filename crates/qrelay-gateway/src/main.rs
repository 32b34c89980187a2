//! qrelay gateway binary entry point.
//!
//! # Configuration
//!
//! An optional YAML file (`--config`) overlaid by environment variables:
//!
//! - `QRELAY_BIND`: listen address (default `127.0.0.1:3000`)
//! - `QRELAY_IBM_ENDPOINT`: IBM Quantum Runtime base URL
//! - `QRELAY_BACKEND`: target backend (default `ibm_brisbane`)
//! - `QRELAY_SHOTS`: shots per job (default `1000`)
//! - `QRELAY_HUB` / `QRELAY_GROUP` / `QRELAY_PROJECT`: IBM Quantum instance
//! - `QRELAY_CORS_ORIGINS`: comma-separated origins, or `*`
//! - `QRELAY_LOG_LEVEL` / `QRELAY_LOG_FORMAT`: `info` / `console` by default
//!
//! ```bash
//! QRELAY_BIND=0.0.0.0:8080 qrelay-gateway --config qrelay.yaml
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use qrelay_gateway::{AppState, GatewayConfig, TracingConfig, create_router, init_tracing};

/// HTTP gateway for IBM Quantum Sampler jobs
#[derive(Parser)]
#[command(name = "qrelay-gateway", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "QRELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overriding configuration
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        GatewayConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }

    init_tracing(&TracingConfig::from(&config.logging))
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    info!(
        endpoint = %config.endpoint,
        backend = %config.backend,
        shots = config.shots,
        "Starting qrelay gateway"
    );

    let bind_addr = config.bind_address;
    let state = Arc::new(AppState::new(config).context("Failed to build IBM Quantum client")?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    info!("Listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("qrelay gateway shut down");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT"),
        () = terminate => info!("Received SIGTERM"),
    }
}
