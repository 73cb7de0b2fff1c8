//! Sitemap generation core for Cartographer.
//!
//! Converts a flat repository tree listing into a nested [`Tree`] and
//! renders it as an indented Markdown bullet list. Both steps are pure
//! transformations over in-memory data; all I/O (fetching the listing,
//! writing the sitemap back) belongs to the caller.
//!
//! # Example
//!
//! ```
//! use carto_sitemap::{Tree, render};
//!
//! let tree = Tree::from_paths(["docs/", "docs/guide.md", "README.md"]);
//! let sitemap = render(&tree);
//!
//! assert_eq!(
//!     sitemap,
//!     "- [docs/](docs/)\n  - [guide.md](docs/guide.md)\n- [README.md](README.md)"
//! );
//! ```

mod filter;
mod render;
mod tree;

pub use filter::{EntryKind, SitemapOptions, TreeEntry, collect_paths};
pub use render::render;
pub use tree::Tree;
