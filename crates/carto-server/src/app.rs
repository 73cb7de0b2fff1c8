//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the application router.
///
/// A single route carries the whole service: GitHub POSTs webhook
/// deliveries, anything browsing the endpoint with GET gets a plain-text
/// brush-off.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/cartographer-webhook",
            post(handlers::webhook::receive_webhook).get(handlers::webhook::landing),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
