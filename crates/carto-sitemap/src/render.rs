//! Markdown sitemap renderer.
//!
//! Walks a [`Tree`] in insertion order and produces a Markdown bullet list
//! with one entry per path segment. Indentation is a uniform 2 spaces per
//! nesting depth (depth 0 at column 0); Markdown renderers interpret
//! indent width to determine list nesting, so the scheme is fixed.

use std::sync::LazyLock;

use regex::Regex;

use crate::tree::Tree;

static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Render a tree as a Markdown bullet-list sitemap body.
///
/// Each entry is a link: display text is the raw segment name (trailing
/// `/` included for directories), the target is the cumulative path from
/// the root with every whitespace run collapsed to a single underscore.
/// Lines are joined with `\n` and no trailing newline or framing is added;
/// an empty tree renders to the empty string.
#[must_use]
pub fn render(tree: &Tree) -> String {
    let mut lines = Vec::new();
    render_node(&mut lines, tree, 0, "");
    lines.join("\n")
}

/// Emit one line per child of `node`, recursing into non-leaf children.
///
/// `indent` is the leading space count for this depth and `prefix` the
/// accumulated path from the root down to (but not including) the child.
fn render_node(lines: &mut Vec<String>, node: &Tree, indent: usize, prefix: &str) {
    for (segment, children) in node.iter() {
        let path = format!("{prefix}{segment}");
        lines.push(format!(
            "{:indent$}- [{segment}]({})",
            "",
            link_target(&path)
        ));
        if !children.is_empty() {
            render_node(lines, children, indent + 2, &path);
        }
    }
}

/// Collapse every whitespace run in the cumulative path to one underscore.
fn link_target(path: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(path, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_tree_renders_empty_string() {
        assert_eq!(render(&Tree::new()), "");
    }

    #[test]
    fn test_flat_list_renders_unindented() {
        let tree = Tree::from_paths(["a", "b"]);

        assert_eq!(render(&tree), "- [a](a)\n- [b](b)");
    }

    #[test]
    fn test_nested_entries_indent_two_spaces_per_depth() {
        let tree = Tree::from_paths(["dir/file1", "dir/dir2/file520"]);

        assert_eq!(
            render(&tree),
            "- [dir/](dir/)\n\
             \u{20} - [file1](dir/file1)\n\
             \u{20} - [dir2/](dir/dir2/)\n\
             \u{20}   - [file520](dir/dir2/file520)"
        );
    }

    #[test]
    fn test_link_target_accumulates_full_path() {
        let tree = Tree::from_paths(["a/b/c"]);
        let lines: Vec<String> = render(&tree).lines().map(str::to_owned).collect();

        assert_eq!(lines[0], "- [a/](a/)");
        assert_eq!(lines[1], "  - [b/](a/b/)");
        assert_eq!(lines[2], "    - [c](a/b/c)");
    }

    #[test]
    fn test_whitespace_normalized_in_target_only() {
        let tree = Tree::from_paths(["my file"]);

        assert_eq!(render(&tree), "- [my file](my_file)");
    }

    #[test]
    fn test_whitespace_run_collapses_to_single_underscore() {
        let tree = Tree::from_paths(["release notes/v 1.0.md"]);

        assert_eq!(
            render(&tree),
            "- [release notes/](release_notes/)\n  - [v 1.0.md](release_notes/v_1.0.md)"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let paths = ["wiki/", "wiki/Home.md", "wiki/guides/setup.md", "README.md"];
        let first = render(&Tree::from_paths(paths));
        let second = render(&Tree::from_paths(paths));

        assert_eq!(first, second);
    }

    #[test]
    fn test_sibling_order_is_preserved_in_output() {
        let tree = Tree::from_paths(["b", "a"]);

        assert_eq!(render(&tree), "- [b](b)\n- [a](a)");
    }
}
