//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all load endpoints
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Serve requests with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::load::MemoryHog;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Process-wide accumulator grown by `/memory`, reset only by restart.
    pub memory: Arc<MemoryHog>,
    /// Outbound client with the probe timeout baked in.
    pub outbound: reqwest::Client,
}

/// HTTP server for the load generator.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let outbound = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.load.outbound_timeout_secs))
            .build()
            .expect("Failed to build outbound HTTP client");

        let state = AppState {
            config: Arc::new(config),
            memory: Arc::new(MemoryHog::new()),
            outbound,
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let config = state.config.clone();

        Router::new()
            .route("/", get(handlers::root))
            .route("/cpu", get(handlers::cpu_load))
            .route("/memory", get(handlers::memory_load))
            .route("/network/inbound", post(handlers::network_inbound))
            .route("/network/outbound", get(handlers::network_outbound))
            .route("/disk", get(handlers::disk_load))
            .layer(axum::middleware::from_fn(metrics::track_requests))
            .layer(DefaultBodyLimit::max(config.load.max_inbound_body_bytes))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
            .with_state(state)
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once the shutdown broadcast fires and in-flight requests have
    /// drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
