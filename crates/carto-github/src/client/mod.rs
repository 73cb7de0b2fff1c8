//! GitHub REST API client.
//!
//! Sync HTTP client for the GitHub v3 REST API with optional bearer-token
//! authentication.

mod contents;
mod tree;

use std::time::Duration;

use ureq::Agent;

use crate::error::GitHubError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// GitHub v3 media type sent on every request.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// GitHub REST API client.
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client against `base_url` (normally `https://api.github.com`).
    ///
    /// `token` is an optional personal access token; without it only public
    /// repositories are readable and the contents PUT will be rejected.
    #[must_use]
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
        }
    }

    /// Repository-scoped API URL: `{base}/repos/{repo}/{tail}`.
    fn repo_url(&self, repo: &str, tail: &str) -> String {
        format!("{}/repos/{}/{}", self.base_url, repo, tail)
    }

    /// Apply the common headers (media type, optional authorization).
    fn prepare<B>(&self, request: ureq::RequestBuilder<B>) -> ureq::RequestBuilder<B> {
        let request = request.header("Accept", GITHUB_MEDIA_TYPE);
        match &self.token {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    /// Map a >= 400 response into [`GitHubError::HttpResponse`], reading the
    /// body for error details.
    fn error_for_status(
        status: u16,
        body_reader: &mut ureq::Body,
    ) -> Result<(), GitHubError> {
        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(GitHubError::HttpResponse {
                status,
                body: error_body,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = GitHubClient::new("https://api.github.com/", None);
        assert_eq!(
            client.repo_url("octo/wiki", "git/trees/abc"),
            "https://api.github.com/repos/octo/wiki/git/trees/abc"
        );
    }

    #[test]
    fn test_repo_url_joins_segments() {
        let client = GitHubClient::new("https://github.example.com/api/v3", None);
        assert_eq!(
            client.repo_url("octo/wiki", "contents/wiki/__sitemap.md"),
            "https://github.example.com/api/v3/repos/octo/wiki/contents/wiki/__sitemap.md"
        );
    }
}
