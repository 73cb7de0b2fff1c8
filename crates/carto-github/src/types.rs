//! Wire types for the GitHub REST API.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use serde::{Deserialize, Serialize};

/// Kind of a git tree entry, from the `type` field of the tree API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeEntryKind {
    /// Regular file.
    Blob,
    /// Directory.
    Tree,
    /// Submodule pointer.
    Commit,
}

/// One entry of a `GET /repos/{repo}/git/trees/{sha}` response.
#[derive(Clone, Debug, Deserialize)]
pub struct GitTreeEntry {
    /// Path relative to the repository root.
    pub path: String,
    /// Entry kind (`blob`, `tree` or `commit`).
    #[serde(rename = "type")]
    pub kind: TreeEntryKind,
    /// Object sha.
    pub sha: String,
}

/// Response of the git tree API.
#[derive(Clone, Debug, Deserialize)]
pub struct GitTree {
    /// Sha of the listed tree.
    pub sha: String,
    /// Whether the listing was cut off by the API limit.
    #[serde(default)]
    pub truncated: bool,
    /// Flat, ordered listing of the tree.
    pub tree: Vec<GitTreeEntry>,
}

/// Subset of a `GET /repos/{repo}/contents/{path}` response.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ContentResponse {
    /// Blob sha of the current file content.
    pub(crate) sha: String,
}

/// Committer identity for a contents update.
#[derive(Clone, Debug, Serialize)]
pub struct Committer {
    /// Committer display name.
    pub name: String,
}

/// Body of a `PUT /repos/{repo}/contents/{path}` request.
#[derive(Clone, Debug, Serialize)]
pub struct PutContentRequest {
    /// Commit message.
    pub message: String,
    /// New file content, base64-encoded.
    pub content: String,
    /// Blob sha of the content being replaced; omitted when creating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Target branch.
    pub branch: String,
    /// Committer identity.
    pub committer: Committer,
}

impl PutContentRequest {
    /// Build a request from raw file bytes, base64-encoding the content as
    /// the contents API requires.
    #[must_use]
    pub fn from_bytes(
        message: impl Into<String>,
        content: &[u8],
        sha: Option<String>,
        branch: impl Into<String>,
        committer_name: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            content: BASE64_STANDARD.encode(content),
            sha,
            branch: branch.into(),
            committer: Committer {
                name: committer_name.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tree_response_deserializes() {
        let json = r#"{
            "sha": "9fb037999f264ba9a7fc6274d15fa3ae2ab98312",
            "truncated": false,
            "tree": [
                {"path": "wiki", "mode": "040000", "type": "tree",
                 "sha": "f484d249c660418515fb01c2b9662073663c242e", "url": "ignored"},
                {"path": "wiki/Home.md", "mode": "100644", "type": "blob",
                 "sha": "44b4fc6d56897b048c772eb4087f854f46256132", "size": 12, "url": "ignored"}
            ]
        }"#;

        let tree: GitTree = serde_json::from_str(json).unwrap();

        assert!(!tree.truncated);
        assert_eq!(tree.tree.len(), 2);
        assert_eq!(tree.tree[0].kind, TreeEntryKind::Tree);
        assert_eq!(tree.tree[1].path, "wiki/Home.md");
        assert_eq!(tree.tree[1].kind, TreeEntryKind::Blob);
    }

    #[test]
    fn test_truncated_defaults_to_false() {
        let json = r#"{"sha": "abc", "tree": []}"#;
        let tree: GitTree = serde_json::from_str(json).unwrap();
        assert!(!tree.truncated);
    }

    #[test]
    fn test_put_request_omits_sha_when_creating() {
        let request = PutContentRequest {
            message: "Auto-generate wiki sitemap".to_owned(),
            content: "c2l0ZW1hcA==".to_owned(),
            sha: None,
            branch: "master".to_owned(),
            committer: Committer {
                name: "Cartographer".to_owned(),
            },
        };

        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("sha").is_none());
        assert_eq!(json["branch"], "master");
        assert_eq!(json["committer"]["name"], "Cartographer");
    }

    #[test]
    fn test_from_bytes_encodes_content() {
        let request = PutContentRequest::from_bytes(
            "Auto-generate wiki sitemap",
            b"sitemap",
            None,
            "master",
            "Cartographer",
        );

        assert_eq!(request.content, "c2l0ZW1hcA==");
        assert_eq!(request.sha, None);
    }

    #[test]
    fn test_put_request_includes_sha_when_updating() {
        let request = PutContentRequest {
            message: "update".to_owned(),
            content: "Zm9v".to_owned(),
            sha: Some("44b4fc6d56897b048c772eb4087f854f46256132".to_owned()),
            branch: "master".to_owned(),
            committer: Committer {
                name: "Cartographer".to_owned(),
            },
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["sha"], "44b4fc6d56897b048c772eb4087f854f46256132");
    }
}
