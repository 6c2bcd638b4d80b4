//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! request → metrics::track_requests (counter + latency histogram)
//!         → tracing spans via TraceLayer
//!
//! /memory → process::resident_set_bytes (RSS for the response body)
//! ```
//!
//! # Design Decisions
//! - tracing for structured logs, EnvFilter for runtime level control
//! - Prometheus exporter on its own listener, fully optional
//! - Process introspection failures degrade the response, never fail it

pub mod logging;
pub mod metrics;
pub mod process;
