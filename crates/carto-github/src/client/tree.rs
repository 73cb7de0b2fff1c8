//! Git tree operations.

use tracing::info;

use super::GitHubClient;
use crate::error::GitHubError;
use crate::types::GitTree;

impl GitHubClient {
    /// Fetch the tree listing for `tree_sha` of `repo` (`owner/name`).
    ///
    /// With `recursive` set, the listing covers the whole tree in a single
    /// call; a listing the API had to truncate is rejected with
    /// [`GitHubError::TruncatedTree`] rather than silently producing an
    /// incomplete sitemap.
    pub fn get_tree(
        &self,
        repo: &str,
        tree_sha: &str,
        recursive: bool,
    ) -> Result<GitTree, GitHubError> {
        let mut url = self.repo_url(repo, &format!("git/trees/{tree_sha}"));
        if recursive {
            url.push_str("?recursive=1");
        }

        info!("Fetching tree {} of {}", tree_sha, repo);

        let response = self.prepare(self.agent.get(&url)).call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();
        Self::error_for_status(status, &mut body_reader)?;

        let tree: GitTree = body_reader.read_json()?;
        if tree.truncated {
            return Err(GitHubError::TruncatedTree {
                repo: repo.to_owned(),
                tree_sha: tree_sha.to_owned(),
            });
        }

        Ok(tree)
    }
}
