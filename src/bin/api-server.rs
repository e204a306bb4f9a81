//! Gemdash API Server
//!
//! HTTP API for the GEM signal history analysis engine. The external data
//! pipeline pushes momentum snapshots and history series in; the dashboard
//! reads ranked signals, rationale text, streak summaries, and windowed
//! history out. This service holds no durable state.

use dotenvy::dotenv;
use gemdash::core::http::start_server;
use gemdash::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let port = gemdash::config::get_port();
    let env = gemdash::config::get_environment();
    info!("Starting Gemdash API Server");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    // Graceful shutdown
    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
