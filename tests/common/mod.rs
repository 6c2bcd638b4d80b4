//! Shared utilities for integration testing.

use std::path::Path;
use std::time::Duration;

use load_generator::config::AppConfig;
use load_generator::http::HttpServer;
use load_generator::lifecycle::Shutdown;

/// Config with small load shapes so tests run quickly.
pub fn test_config(scratch_dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.load.cpu_duration_secs = 1;
    config.load.memory_chunk_bytes = 1024 * 1024;
    config.load.disk_file_bytes = 1024 * 1024;
    config.load.scratch_dir = Some(scratch_dir.to_path_buf());
    config.load.outbound_timeout_secs = 2;
    config.observability.metrics_enabled = false;
    config
}

/// Spawn the service on an ephemeral port.
///
/// Returns the base URL and the shutdown handle; trigger it to stop the
/// server at the end of the test.
pub async fn spawn_service(config: AppConfig) -> (String, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    (format!("http://{}", addr), shutdown)
}

/// Extract the "message" field from a JSON response body.
pub fn message_of(body: &serde_json::Value) -> &str {
    body["message"].as_str().expect("response has no message field")
}
