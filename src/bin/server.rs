//! Quorum HTTP Server Binary
//!
//! This is the main entry point for the quorum REST API server.
//! It loads the engine configuration, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin quorum-server --features "http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `QUORUM_TIMEZONE`: Display timezone (default: America/New_York)
//! - `QUORUM_MIN_BLOCK_PERCENTAGE`: Primary block threshold (default: 50)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use quorum_rust::config::EngineConfig;
use quorum_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Quorum HTTP Server");

    // Load engine configuration once and share it across requests
    let config = EngineConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!(
        "Engine configured: timezone={}, min_block_percentage={}",
        config.timezone, config.min_block_percentage
    );

    // Create application state
    let state = AppState::new(config);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
