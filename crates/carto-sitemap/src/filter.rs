//! Caller-side path filtering.
//!
//! Turns a classified tree listing into the path list fed to
//! [`Tree::from_paths`](crate::Tree::from_paths), applying the configured
//! exclusions before any tree is built.

/// Kind of a tree listing entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (blob).
    File,
    /// Directory (tree).
    Directory,
}

/// One entry of a recursive repository tree listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the repository root, no trailing separator.
    pub path: String,
    /// Whether the entry is a file or a directory.
    pub kind: EntryKind,
}

impl TreeEntry {
    /// Create a file entry.
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry.
    #[must_use]
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    /// Path entry string for the tree builder: directories gain their
    /// trailing `/`, files are passed through unchanged.
    #[must_use]
    pub fn tree_path(&self) -> String {
        match self.kind {
            EntryKind::File => self.path.clone(),
            EntryKind::Directory => format!("{}/", self.path),
        }
    }
}

/// Filtering options applied before the tree is built.
#[derive(Clone, Debug)]
pub struct SitemapOptions {
    /// Destination path of the generated sitemap; always excluded so the
    /// sitemap never lists itself.
    pub sitemap_path: String,
    /// Restrict the sitemap to entries under this prefix.
    pub path_prefix: Option<String>,
    /// List directories only, dropping every file entry.
    pub skip_files: bool,
}

impl SitemapOptions {
    /// Options for a sitemap at `sitemap_path` with no further filtering.
    #[must_use]
    pub fn new(sitemap_path: impl Into<String>) -> Self {
        Self {
            sitemap_path: sitemap_path.into(),
            path_prefix: None,
            skip_files: false,
        }
    }

    fn keep(&self, entry: &TreeEntry) -> bool {
        if entry.path == self.sitemap_path {
            return false;
        }
        if self.skip_files && entry.kind == EntryKind::File {
            return false;
        }
        match &self.path_prefix {
            Some(prefix) => entry.path.starts_with(prefix.as_str()),
            None => true,
        }
    }
}

/// Apply `options` to a classified listing, producing the ordered path
/// list for [`Tree::from_paths`](crate::Tree::from_paths).
///
/// Input order is preserved; filtering never reorders entries.
#[must_use]
pub fn collect_paths(entries: &[TreeEntry], options: &SitemapOptions) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| options.keep(entry))
        .map(TreeEntry::tree_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Tree, render};

    fn listing() -> Vec<TreeEntry> {
        vec![
            TreeEntry::file("README.md"),
            TreeEntry::directory("wiki"),
            TreeEntry::file("wiki/Home.md"),
            TreeEntry::file("wiki/__sitemap.md"),
            TreeEntry::directory("src"),
            TreeEntry::file("src/main.rs"),
        ]
    }

    #[test]
    fn test_sitemap_path_is_always_excluded() {
        let options = SitemapOptions::new("wiki/__sitemap.md");
        let paths = collect_paths(&listing(), &options);

        assert!(!paths.iter().any(|p| p.contains("__sitemap.md")));

        // And it never reaches the rendered output either.
        let rendered = render(&Tree::from_paths(&paths));
        assert!(!rendered.contains("__sitemap.md"));
    }

    #[test]
    fn test_directory_entries_gain_trailing_separator() {
        let options = SitemapOptions::new("wiki/__sitemap.md");
        let paths = collect_paths(&listing(), &options);

        assert_eq!(
            paths,
            vec![
                "README.md",
                "wiki/",
                "wiki/Home.md",
                "src/",
                "src/main.rs"
            ]
        );
    }

    #[test]
    fn test_skip_files_keeps_directories_only() {
        let options = SitemapOptions {
            skip_files: true,
            ..SitemapOptions::new("wiki/__sitemap.md")
        };
        let paths = collect_paths(&listing(), &options);

        assert_eq!(paths, vec!["wiki/", "src/"]);
    }

    #[test]
    fn test_path_prefix_restricts_to_subtree() {
        let options = SitemapOptions {
            path_prefix: Some("wiki".to_owned()),
            ..SitemapOptions::new("wiki/__sitemap.md")
        };
        let paths = collect_paths(&listing(), &options);

        assert_eq!(paths, vec!["wiki/", "wiki/Home.md"]);
    }

    #[test]
    fn test_empty_listing_yields_empty_paths() {
        let options = SitemapOptions::new("wiki/__sitemap.md");
        assert!(collect_paths(&[], &options).is_empty());
    }
}
