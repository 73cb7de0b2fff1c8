//! Webhook endpoint.
//!
//! Receives GitHub webhook deliveries and triggers the sitemap update for
//! push events.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ServerError;
use crate::payload::PushEvent;
use crate::state::AppState;
use crate::update;

/// Delivery event type header sent by GitHub.
const EVENT_HEADER: &str = "X-GitHub-Event";

/// Handle POST /cartographer-webhook.
///
/// Ping deliveries and unknown event types are acknowledged without work.
/// A push whose `after` sha matches none of the delivered commits (branch
/// deletion, some force-pushes) is likewise a 200 no-op.
pub(crate) async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<StatusCode, ServerError> {
    match headers.get(EVENT_HEADER).and_then(|v| v.to_str().ok()) {
        Some("push") | None => {}
        Some(event) => {
            debug!(event, "Ignoring non-push delivery");
            return Ok(StatusCode::OK);
        }
    }

    let event: PushEvent = serde_json::from_value(payload)?;

    let Some(commit) = event.head_commit() else {
        info!(
            after = %event.after,
            repo = %event.repository.full_name,
            "No matching head commit in push, skipping"
        );
        return Ok(StatusCode::OK);
    };

    let repo = event.repository.full_name.clone();
    let tree_sha = commit.tree_id.clone();
    info!(repo = %repo, tree = %tree_sha, "Push received, regenerating sitemap");

    // GitHubClient is sync; keep the async worker free while it runs.
    tokio::task::spawn_blocking(move || {
        update::update_sitemap(&state.client, &state.sitemap, &repo, &tree_sha)
    })
    .await??;

    Ok(StatusCode::OK)
}

/// Handle GET /cartographer-webhook.
///
/// Humans end up here; the endpoint exists for GitHub's POSTs only.
pub(crate) async fn landing() -> &'static str {
    "Cartographer webhook endpoint. Configure it as a push webhook; nothing to see here.\n"
}
