//! Application state.
//!
//! Shared state for all request handlers.

use carto_github::GitHubClient;

use crate::update::SitemapSettings;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// GitHub API client.
    pub(crate) client: GitHubClient,
    /// Sitemap generation settings.
    pub(crate) sitemap: SitemapSettings,
}
