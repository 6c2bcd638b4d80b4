//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Returns all validation
//! errors, not just the first, so a broken config can be fixed in one pass.

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic configuration error.
#[derive(Debug)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidMetricsAddress(String),
    InvalidOutboundUrl(String),
    ZeroDuration(&'static str),
    ZeroSize(&'static str),
    RequestTimeoutTooShort { request_secs: u64, cpu_secs: u64 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address is not a socket address: {}", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "observability.metrics_address is not a socket address: {}", addr)
            }
            ValidationError::InvalidOutboundUrl(url) => {
                write!(f, "load.outbound_url is not an http(s) URL: {}", url)
            }
            ValidationError::ZeroDuration(field) => {
                write!(f, "{} must be at least 1 second", field)
            }
            ValidationError::ZeroSize(field) => {
                write!(f, "{} must be non-zero", field)
            }
            ValidationError::RequestTimeoutTooShort { request_secs, cpu_secs } => {
                write!(
                    f,
                    "timeouts.request_secs ({}) must exceed load.cpu_duration_secs ({})",
                    request_secs, cpu_secs
                )
            }
        }
    }
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    match url::Url::parse(&config.load.outbound_url) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
        _ => errors.push(ValidationError::InvalidOutboundUrl(
            config.load.outbound_url.clone(),
        )),
    }

    if config.load.cpu_duration_secs == 0 {
        errors.push(ValidationError::ZeroDuration("load.cpu_duration_secs"));
    }
    if config.load.outbound_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("load.outbound_timeout_secs"));
    }
    if config.load.memory_chunk_bytes == 0 {
        errors.push(ValidationError::ZeroSize("load.memory_chunk_bytes"));
    }
    if config.load.disk_file_bytes == 0 {
        errors.push(ValidationError::ZeroSize("load.disk_file_bytes"));
    }
    if config.load.max_inbound_body_bytes == 0 {
        errors.push(ValidationError::ZeroSize("load.max_inbound_body_bytes"));
    }

    if config.timeouts.request_secs <= config.load.cpu_duration_secs {
        errors.push(ValidationError::RequestTimeoutTooShort {
            request_secs: config.timeouts.request_secs,
            cpu_secs: config.load.cpu_duration_secs,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
