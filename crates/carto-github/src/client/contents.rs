//! Repository contents operations.

use tracing::{debug, info};

use super::GitHubClient;
use crate::error::GitHubError;
use crate::types::{ContentResponse, PutContentRequest};

impl GitHubClient {
    /// Look up the blob sha of `path` in `repo`, `None` when the file does
    /// not exist yet (first run, before any sitemap was committed).
    pub fn get_content_sha(&self, repo: &str, path: &str) -> Result<Option<String>, GitHubError> {
        let url = self.repo_url(repo, &format!("contents/{path}"));

        debug!("Looking up content sha for {} in {}", path, repo);

        let response = self.prepare(self.agent.get(&url)).call()?;

        let status = response.status().as_u16();
        if status == 404 {
            return Ok(None);
        }

        let mut body_reader = response.into_body();
        Self::error_for_status(status, &mut body_reader)?;

        let content: ContentResponse = body_reader.read_json()?;
        Ok(Some(content.sha))
    }

    /// Create or update `path` in `repo` through the contents API.
    pub fn put_content(
        &self,
        repo: &str,
        path: &str,
        request: &PutContentRequest,
    ) -> Result<(), GitHubError> {
        let url = self.repo_url(repo, &format!("contents/{path}"));

        info!("Writing {} to {} on {}", path, repo, request.branch);

        let payload_bytes = serde_json::to_vec(request)?;

        let response = self
            .prepare(self.agent.put(&url))
            .header("Content-Type", "application/json")
            .send(&payload_bytes[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();
        Self::error_for_status(status, &mut body_reader)?;

        Ok(())
    }
}
