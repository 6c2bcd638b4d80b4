//! Request handlers, one per load endpoint.

use std::time::{Duration, Instant};

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::http::response::{ApiError, Message};
use crate::http::server::AppState;
use crate::load::network::ProbeOutcome;
use crate::load::{cpu, disk, network};

/// `GET /`: liveness acknowledgement, no side effects.
pub async fn root() -> impl IntoResponse {
    Json(json!({"Hello": "World"}))
}

/// `GET /cpu`: busy a worker thread for the configured duration.
///
/// The burn runs on the blocking pool so async workers keep serving other
/// requests. The handler does not return before the duration elapses; if the
/// client goes away the response is simply dropped.
pub async fn cpu_load(State(state): State<AppState>) -> Result<Json<Message>, ApiError> {
    let secs = state.config.load.cpu_duration_secs;
    let duration = Duration::from_secs(secs);
    let start = Instant::now();

    let rounds = tokio::task::spawn_blocking(move || cpu::burn_for(duration))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "CPU burn task failed");
            ApiError::internal("CPU load task failed")
        })?;

    tracing::debug!(
        rounds,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "CPU burn finished"
    );

    Ok(Json(Message::new(format!(
        "CPU load generated for {} seconds.",
        secs
    ))))
}

/// `GET /memory`: append one chunk to the accumulator and report RSS.
///
/// RSS measurement failing is a degraded path, not an error: the chunk is
/// still retained and the response reports 0.00 MB.
pub async fn memory_load(State(state): State<AppState>) -> Json<Message> {
    let chunk_bytes = state.config.load.memory_chunk_bytes;
    let total = state.memory.grow(chunk_bytes);

    let rss_mb = crate::observability::process::resident_set_bytes()
        .map(|bytes| bytes as f64 / 1024.0 / 1024.0)
        .unwrap_or_else(|| {
            tracing::warn!("Process RSS unavailable, reporting 0.00");
            0.0
        });

    tracing::debug!(
        chunk_bytes,
        accumulated_bytes = total,
        rss_mb,
        "Memory accumulator grown"
    );

    Json(Message::new(format!(
        "Memory usage increased. Current RSS: {:.2} MB",
        rss_mb
    )))
}

/// `POST /network/inbound`: drain the body and report its length.
///
/// The `Bytes` extractor reads the body to completion, so the connection is
/// never left half-read even though the payload itself is discarded. An
/// empty body is valid and reports 0. The only size cap is the configured
/// body limit enforced by the router layer.
pub async fn network_inbound(body: Bytes) -> Json<Message> {
    let received = body.len();
    tracing::debug!(bytes = received, "Inbound payload drained");
    Json(Message::new(format!(
        "Received {} bytes of data.",
        received
    )))
}

/// `GET /network/outbound`: one outbound GET with a hard timeout.
///
/// Outbound failure is an expected, reportable outcome: both arms respond
/// 200 and the body carries either the remote status code or the failure
/// description.
pub async fn network_outbound(State(state): State<AppState>) -> Json<Message> {
    let url = &state.config.load.outbound_url;
    let message = match network::probe(&state.outbound, url).await {
        ProbeOutcome::Completed { status } => format!(
            "Made outbound request to {}. Status code: {}",
            network::target_label(url),
            status
        ),
        ProbeOutcome::Failed { reason } => {
            format!("Failed to make outbound request: {}", reason)
        }
    };
    Json(Message::new(message))
}

/// `GET /disk`: full write-read-delete cycle on a unique scratch file.
///
/// I/O failure surfaces as a 500 with a JSON body; the scratch file is
/// removed on every exit path by the guard inside the cycle.
pub async fn disk_load(State(state): State<AppState>) -> Result<Json<Message>, ApiError> {
    let dir = state.config.load.scratch_dir();
    let bytes = state.config.load.disk_file_bytes;

    let report = disk::run_cycle(&dir, bytes).await.map_err(|e| {
        tracing::error!(error = %e, "Disk cycle failed");
        ApiError::from(e)
    })?;

    Ok(Json(Message::new(format!(
        "Disk I/O simulation complete ({}MB write/read).",
        report.mebibytes()
    ))))
}
