//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the load
//! generator. All types derive Serde traits for deserialization from config
//! files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the load generator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Load-shape settings for the individual endpoints.
    pub load: LoadConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Load-shape configuration for the resource endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Wall-clock duration of the `/cpu` busy loop in seconds.
    pub cpu_duration_secs: u64,

    /// Size of each buffer appended to the memory accumulator by `/memory`.
    pub memory_chunk_bytes: usize,

    /// Size of the scratch file written and read back by `/disk`.
    pub disk_file_bytes: usize,

    /// Directory for scratch files. Falls back to the OS temp dir.
    pub scratch_dir: Option<PathBuf>,

    /// Target URL for the `/network/outbound` probe.
    pub outbound_url: String,

    /// Hard timeout for the outbound probe in seconds.
    pub outbound_timeout_secs: u64,

    /// Maximum accepted `/network/inbound` body size in bytes.
    pub max_inbound_body_bytes: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            cpu_duration_secs: 2,
            memory_chunk_bytes: 10 * 1024 * 1024,
            disk_file_bytes: 10 * 1024 * 1024,
            scratch_dir: None,
            outbound_url: "https://google.com".to_string(),
            outbound_timeout_secs: 5,
            max_inbound_body_bytes: 64 * 1024 * 1024,
        }
    }
}

impl LoadConfig {
    /// Directory scratch files are created in.
    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    /// Must exceed the CPU busy duration or `/cpu` would always time out.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
