//! Sitemap tree model and builder.
//!
//! Builds a nested filesystem hierarchy from a flat, ordered list of path
//! strings as returned by a recursive repository tree listing. Directory
//! entries carry a trailing `/`; file entries do not.

use indexmap::IndexMap;

/// Filesystem hierarchy as an insertion-ordered mapping from path segment
/// to child subtree.
///
/// An empty mapping is a leaf: a file or an empty directory. Presence of
/// children is the only signal the renderer uses to decide whether to
/// recurse. Sibling order equals first-occurrence order in the input list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree(IndexMap<String, Tree>);

impl Tree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from an ordered sequence of path entries.
    ///
    /// Directories must be suffixed with `/`; files must not be. Ancestor
    /// directories are synthesized as needed, so `dir/` and `dir/sub/` need
    /// not appear standalone for `dir/sub/file` to nest correctly.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for path in paths {
            tree.insert(path.as_ref());
        }
        tree
    }

    /// Insert a single path entry.
    ///
    /// Single-segment entries become root-level keys. Multi-segment entries
    /// are split on `/` and walked from the root, creating missing
    /// intermediate directory nodes (keyed with their trailing `/`) along
    /// the way. Revisiting an existing directory never discards descendants
    /// inserted earlier.
    ///
    /// Malformed entries (empty string, leading `/`) degrade to harmless
    /// root-level keys; no input is rejected.
    pub fn insert(&mut self, path: &str) {
        let (stem, is_dir) = match path.strip_suffix('/') {
            Some(stem) => (stem, true),
            None => (path, false),
        };

        // "file" or "dir/" sits directly under the root, key as given.
        if !stem.contains('/') {
            self.0.entry(path.to_owned()).or_default();
            return;
        }

        let segments: Vec<&str> = stem.split('/').collect();
        let last = segments.len() - 1;
        let mut node = self;
        for (i, segment) in segments.iter().enumerate() {
            let key = if i < last || is_dir {
                format!("{segment}/")
            } else {
                (*segment).to_owned()
            };
            node = node.0.entry(key).or_default();
        }
    }

    /// Iterate the direct children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tree)> {
        self.0.iter().map(|(key, child)| (key.as_str(), child))
    }

    /// Look up a direct child by its segment key.
    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&Tree> {
        self.0.get(segment)
    }

    /// Whether this node has no children (file or empty directory).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
