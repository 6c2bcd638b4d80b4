//! Synthetic Resource-Load Generator Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod load;
pub mod observability;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
