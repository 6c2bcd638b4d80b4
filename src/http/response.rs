//! Response body types shared by all handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::load::DiskError;

/// The JSON object body every load endpoint responds with.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error response carrying a status code and a JSON message body.
///
/// A request's failure stays local to its own request/response cycle; the
/// process never terminates on a handler error.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(Message::new(self.message))).into_response()
    }
}

impl From<DiskError> for ApiError {
    fn from(e: DiskError) -> Self {
        ApiError::internal(format!("Disk I/O simulation failed: {}", e))
    }
}
