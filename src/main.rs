//! Synthetic Resource-Load Generator
//!
//! An HTTP service whose endpoints deliberately consume CPU, memory, disk,
//! and network resources on demand, built with Tokio and Axum. Intended to
//! exercise an external monitoring/autoscaling pipeline under controlled,
//! repeatable load.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │              LOAD GENERATOR                   │
//!                    │                                               │
//!   GET /cpu ───────▶│  http/server ──▶ load/cpu   (busy worker)    │
//!   GET /memory ────▶│       │      ──▶ load/memory (accumulator)   │
//!   POST /network/.. │       │      ──▶ load/disk   (scratch file)  │
//!   GET /disk ──────▶│       │      ──▶ load/network (outbound GET) │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │  config   observability   lifecycle      │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::Path;

use tokio::net::TcpListener;

use load_generator::config::{loader, AppConfig};
use load_generator::http::HttpServer;
use load_generator::lifecycle::{signals, Shutdown};
use load_generator::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (built-in defaults when no file is given)
    let config = match std::env::args().nth(1) {
        Some(path) => loader::load_config(Path::new(&path))?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("load-generator v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        cpu_duration_secs = config.load.cpu_duration_secs,
        memory_chunk_bytes = config.load.memory_chunk_bytes,
        disk_file_bytes = config.load.disk_file_bytes,
        outbound_url = %config.load.outbound_url,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Ctrl+C triggers the shutdown broadcast
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
