//! Error types for the GitHub client.

/// Error from GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Tree listing was truncated by the API; the sitemap would be
    /// incomplete.
    #[error("tree listing for {repo}@{tree_sha} is truncated")]
    TruncatedTree {
        /// Repository in `owner/name` form.
        repo: String,
        /// Tree sha whose listing was truncated.
        tree_sha: String,
    },
}
