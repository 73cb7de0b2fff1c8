//! Webhook HTTP server for Cartographer.
//!
//! Listens for GitHub push webhooks and regenerates the repository's
//! Markdown sitemap on every push, committing it back through the
//! contents API.
//!
//! # Architecture
//!
//! ```text
//! GitHub ──push webhook──► axum server (carto-server)
//!                               │
//!                               ├─► payload parsing (ping / push triage)
//!                               │
//!                               └─► spawn_blocking
//!                                       │
//!                                       ├─► GitHubClient (tree fetch)
//!                                       ├─► carto-sitemap (filter + build + render)
//!                                       └─► GitHubClient (contents PUT)
//! ```

mod app;
mod error;
mod handlers;
mod payload;
mod state;
mod update;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use carto_github::GitHubClient;
use carto_sitemap::SitemapOptions;
use state::AppState;

pub use error::ServerError;
pub use update::{SitemapSettings, render_sitemap, update_sitemap};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// GitHub API base URL.
    pub api_url: String,
    /// GitHub access token (`None` works for public reads only).
    pub token: Option<String>,
    /// Sitemap generation settings.
    pub sitemap: SitemapSettings,
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = GitHubClient::new(&config.api_url, config.token.clone());

    let state = Arc::new(AppState {
        client,
        sitemap: config.sitemap.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting webhook server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Cartographer config.
#[must_use]
pub fn server_config_from_config(config: &carto_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        api_url: config.github.api_url.clone(),
        token: config.github.token.clone(),
        sitemap: SitemapSettings {
            options: SitemapOptions {
                sitemap_path: config.sitemap.path.clone(),
                path_prefix: config.sitemap.path_prefix.clone(),
                skip_files: config.sitemap.skip_files,
            },
            branch: config.sitemap.branch.clone(),
            committer: config.sitemap.committer.clone(),
        },
    }
}
