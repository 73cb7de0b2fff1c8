//! Error types for the webhook server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use carto_github::GitHubError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Webhook payload did not match the expected push-event shape.
    #[error("invalid webhook payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// GitHub API call failed.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] GitHubError),

    /// Background update task panicked or was cancelled.
    #[error("sitemap update task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Payload(e) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid payload", "detail": e.to_string()}),
            ),
            Self::GitHub(e) => (
                StatusCode::BAD_GATEWAY,
                json!({"error": e.to_string()}),
            ),
            Self::Join(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
