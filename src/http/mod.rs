//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! request → middleware (request ID, trace, timeout, body limit)
//!         → handlers.rs (one handler per load endpoint)
//!         → load primitives (cpu / memory / disk / network)
//!         → response.rs (JSON message body)
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
