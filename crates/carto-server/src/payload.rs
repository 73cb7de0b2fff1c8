//! GitHub push-event payload types.
//!
//! Only the fields the sitemap pipeline reads are modelled; the webhook
//! delivers far more.

use serde::Deserialize;

/// Push event payload (`X-GitHub-Event: push`).
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PushEvent {
    /// Sha of the head commit after the push.
    pub(crate) after: String,
    /// Commits contained in the push.
    pub(crate) commits: Vec<PushCommit>,
    /// Repository the push landed in.
    pub(crate) repository: Repository,
}

/// One commit of a push event.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PushCommit {
    /// Commit sha.
    pub(crate) id: String,
    /// Sha of the commit's root tree.
    pub(crate) tree_id: String,
}

/// Repository of a push event.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Repository {
    /// `owner/name` form.
    pub(crate) full_name: String,
}

impl PushEvent {
    /// The pushed head commit, `None` when `after` matches none of the
    /// delivered commits (e.g. a branch deletion or force-push edge).
    pub(crate) fn head_commit(&self) -> Option<&PushCommit> {
        self.commits.iter().find(|commit| commit.id == self.after)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn push_json() -> serde_json::Value {
        serde_json::json!({
            "ref": "refs/heads/master",
            "after": "head000",
            "commits": [
                {"id": "older1", "tree_id": "tree1", "message": "first"},
                {"id": "head000", "tree_id": "tree2", "message": "second"}
            ],
            "repository": {"full_name": "octo/wiki", "private": false}
        })
    }

    #[test]
    fn test_push_event_deserializes_with_extra_fields() {
        let event: PushEvent = serde_json::from_value(push_json()).unwrap();

        assert_eq!(event.after, "head000");
        assert_eq!(event.commits.len(), 2);
        assert_eq!(event.repository.full_name, "octo/wiki");
    }

    #[test]
    fn test_head_commit_matches_after_sha() {
        let event: PushEvent = serde_json::from_value(push_json()).unwrap();

        let head = event.head_commit().unwrap();
        assert_eq!(head.id, "head000");
        assert_eq!(head.tree_id, "tree2");
    }

    #[test]
    fn test_head_commit_missing_when_after_unmatched() {
        let mut json = push_json();
        json["after"] = serde_json::json!("deadbeef");
        let event: PushEvent = serde_json::from_value(json).unwrap();

        assert!(event.head_commit().is_none());
    }
}
