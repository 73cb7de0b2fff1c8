//! GitHub REST API client for Cartographer.
//!
//! Sync HTTP client (v3 REST API) covering the three calls the sitemap
//! pipeline needs: recursive tree listing, contents lookup, and contents
//! update. Authentication is an optional bearer token; unauthenticated
//! access works for public repositories within rate limits.

mod client;
mod error;
mod types;

pub use client::GitHubClient;
pub use error::GitHubError;
pub use types::{Committer, GitTree, GitTreeEntry, PutContentRequest, TreeEntryKind};
