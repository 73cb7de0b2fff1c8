//! Sitemap update pipeline.
//!
//! Synchronous fetch / filter / build / render / commit sequence, run on a
//! blocking task per accepted push.

use carto_github::{GitHubClient, GitHubError, GitTree, PutContentRequest, TreeEntryKind};
use carto_sitemap::{SitemapOptions, Tree, TreeEntry, collect_paths, render};
use chrono::Utc;
use tracing::info;

/// Sitemap generation settings, shared by the webhook handler and the
/// one-shot CLI path.
#[derive(Clone, Debug)]
pub struct SitemapSettings {
    /// Filtering options for the tree listing.
    pub options: SitemapOptions,
    /// Branch the sitemap commit lands on.
    pub branch: String,
    /// Committer name on the generated commit.
    pub committer: String,
}

/// Regenerate the sitemap for `tree_sha` of `repo` and commit it back.
///
/// `tree_sha` may be anything the git trees API resolves: a tree sha, a
/// commit sha, or a branch name. The prior sitemap blob sha is resolved
/// from the just-fetched listing; when the file is not in the listing the
/// contents API is consulted, and a still-missing file turns the PUT into
/// a create (first run).
pub fn update_sitemap(
    client: &GitHubClient,
    settings: &SitemapSettings,
    repo: &str,
    tree_sha: &str,
) -> Result<(), GitHubError> {
    let listing = client.get_tree(repo, tree_sha, true)?;

    let document = render_sitemap(&listing, &settings.options);

    let prior_sha = match find_blob_sha(&listing, &settings.options.sitemap_path) {
        Some(sha) => Some(sha.to_owned()),
        None => client.get_content_sha(repo, &settings.options.sitemap_path)?,
    };

    let message = format!("Auto-generate wiki sitemap ({})", Utc::now().to_rfc3339());
    let request = PutContentRequest::from_bytes(
        message,
        document.as_bytes(),
        prior_sha,
        &settings.branch,
        &settings.committer,
    );
    client.put_content(repo, &settings.options.sitemap_path, &request)?;

    info!(
        "Updated sitemap {} for {}@{}",
        settings.options.sitemap_path, repo, tree_sha
    );
    Ok(())
}

/// Render the framed sitemap document for a tree listing.
///
/// Framing (title and disclaimer) lives here, not in the renderer; the
/// renderer produces the bare bullet list.
#[must_use]
pub fn render_sitemap(listing: &GitTree, options: &SitemapOptions) -> String {
    let entries = classify(listing);
    let paths = collect_paths(&entries, options);
    let body = render(&Tree::from_paths(&paths));

    let mut document = String::from(
        "# Sitemap\n\nGenerated automatically by Cartographer. Do not edit by hand.\n\n",
    );
    document.push_str(&body);
    document.push('\n');
    document
}

/// Classify the raw listing for the filter: `tree` entries become
/// directories, everything else (blobs, submodule pointers) a plain file
/// entry.
fn classify(listing: &GitTree) -> Vec<TreeEntry> {
    listing
        .tree
        .iter()
        .map(|entry| match entry.kind {
            TreeEntryKind::Tree => TreeEntry::directory(entry.path.clone()),
            TreeEntryKind::Blob | TreeEntryKind::Commit => TreeEntry::file(entry.path.clone()),
        })
        .collect()
}

/// Blob sha of `path` in the listing, if present.
fn find_blob_sha<'a>(listing: &'a GitTree, path: &str) -> Option<&'a str> {
    listing
        .tree
        .iter()
        .find(|entry| entry.path == path)
        .map(|entry| entry.sha.as_str())
}
