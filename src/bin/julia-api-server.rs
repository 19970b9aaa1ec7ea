// ABOUTME: Server binary for the Julia Kitchen API
// ABOUTME: Loads configuration, opens the document store, and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! # Julia Kitchen API Server Binary
//!
//! Starts the recipe and cooking-event REST API: configuration from the
//! environment, one long-lived database connection, and an axum HTTP server
//! with graceful shutdown.

use anyhow::Result;
use clap::Parser;
use julia_api_server::{config::environment::ServerConfig, database::Database, logging, routes};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "julia-api-server")]
#[command(about = "Julia Kitchen API - recipes and cooking event logs over REST")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Julia Kitchen API");
    info!("{}", config.summary());

    // Initialize the document store; the pool lives for the whole process
    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized: {}", config.database.url);

    let app = routes::router(Arc::new(database), &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {e}");
    } else {
        info!("Shutdown signal received");
    }
}
