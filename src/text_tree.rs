//! Indented text rendering for labelled trees.
//!
//! Shared by the parameter model (`paramtree show`) and the display tree of
//! current selections. Output is a pre-order listing, one node per line, the
//! root unprefixed and every descendant prefixed by connector glyphs.

use crate::ui::theme::{connectors, connectors_ascii};

/// Connector glyph set used when rendering a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeGlyphs {
    pub branch: &'static str,
    pub last: &'static str,
    pub pipe: &'static str,
    pub blank: &'static str,
}

impl TreeGlyphs {
    pub const UNICODE: TreeGlyphs = TreeGlyphs {
        branch: connectors::BRANCH,
        last: connectors::LAST,
        pipe: connectors::PIPE,
        blank: connectors::BLANK,
    };

    pub const ASCII: TreeGlyphs = TreeGlyphs {
        branch: connectors_ascii::BRANCH,
        last: connectors_ascii::LAST,
        pipe: connectors_ascii::PIPE,
        blank: connectors_ascii::BLANK,
    };

    pub fn for_unicode(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self::UNICODE
        } else {
            Self::ASCII
        }
    }
}

impl Default for TreeGlyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Render a tree given accessors for labels and children.
pub fn render_lines<'a, N, L, C>(root: N, label: L, children: C, glyphs: &TreeGlyphs) -> Vec<String>
where
    N: Copy,
    L: Fn(N) -> &'a str,
    C: Fn(N) -> Vec<N>,
{
    let mut lines = vec![label(root).to_string()];
    push_children(root, "", &label, &children, glyphs, &mut lines);
    lines
}

fn push_children<'a, N, L, C>(
    node: N,
    prefix: &str,
    label: &L,
    children: &C,
    glyphs: &TreeGlyphs,
    lines: &mut Vec<String>,
) where
    N: Copy,
    L: Fn(N) -> &'a str,
    C: Fn(N) -> Vec<N>,
{
    let kids = children(node);
    let last_index = kids.len().saturating_sub(1);
    for (i, child) in kids.into_iter().enumerate() {
        let is_last = i == last_index;
        let connector = if is_last { glyphs.last } else { glyphs.branch };
        lines.push(format!("{}{}{}", prefix, connector, label(child)));

        let fill = if is_last { glyphs.blank } else { glyphs.pipe };
        let child_prefix = format!("{}{}", prefix, fill);
        push_children(child, &child_prefix, label, children, glyphs, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node {
        name: &'static str,
        children: Vec<Node>,
    }

    fn node(name: &'static str, children: Vec<Node>) -> Node {
        Node { name, children }
    }

    fn render(root: &Node, glyphs: &TreeGlyphs) -> String {
        render_lines(root, |n| n.name, |n| n.children.iter().collect(), glyphs).join("\n")
    }

    #[test]
    fn single_root_renders_bare_label() {
        let root = node("Root", vec![]);
        assert_eq!(render(&root, &TreeGlyphs::UNICODE), "Root");
    }

    #[test]
    fn nested_children_use_pipe_for_open_branches() {
        let root = node(
            "Root",
            vec![
                node("A", vec![node("A1", vec![])]),
                node("B", vec![node("B1", vec![]), node("B2", vec![])]),
            ],
        );

        let expected = [
            "Root",
            "├── A",
            "│   └── A1",
            "└── B",
            "    ├── B1",
            "    └── B2",
        ]
        .join("\n");
        assert_eq!(render(&root, &TreeGlyphs::UNICODE), expected);
    }

    #[test]
    fn ascii_glyphs() {
        let root = node("Root", vec![node("A", vec![node("A1", vec![])]), node("B", vec![])]);

        let expected = ["Root", "|-- A", "|   `-- A1", "`-- B"].join("\n");
        assert_eq!(render(&root, &TreeGlyphs::ASCII), expected);
    }
}
