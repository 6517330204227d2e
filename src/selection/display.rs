//! Display tree: the live summary of current selections.
//!
//! Nodes live in an arena addressed by [`DisplayNodeId`]. Replacing a
//! node's children detaches the old subtree and tombstones it; ids are never
//! reused, so an id held by a caller can go stale but never points at a
//! different node. Tombstones accumulate at most one path length per
//! reselection until [`DisplayTree::into_compacted`] rebuilds the arena.

use serde::Serialize;

use crate::text_tree::{render_lines, TreeGlyphs};

/// Stable identifier of a node in a [`DisplayTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayNodeId(usize);

#[derive(Debug, Clone)]
struct DisplayNode {
    name: String,
    parent: Option<DisplayNodeId>,
    children: Vec<DisplayNodeId>,
    live: bool,
}

/// Arena-backed tree of display nodes
#[derive(Debug, Clone)]
pub struct DisplayTree {
    nodes: Vec<DisplayNode>,
}

/// Owned, nested copy of a display tree, for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DisplaySnapshot>,
}

impl DisplayTree {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![DisplayNode {
                name: root_name.into(),
                parent: None,
                children: Vec::new(),
                live: true,
            }],
        }
    }

    pub fn root(&self) -> DisplayNodeId {
        DisplayNodeId(0)
    }

    pub fn name(&self, id: DisplayNodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub fn parent(&self, id: DisplayNodeId) -> Option<DisplayNodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: DisplayNodeId) -> &[DisplayNodeId] {
        &self.nodes[id.0].children
    }

    pub fn is_live(&self, id: DisplayNodeId) -> bool {
        self.nodes.get(id.0).is_some_and(|n| n.live)
    }

    pub fn is_leaf(&self, id: DisplayNodeId) -> bool {
        self.nodes[id.0].children.is_empty()
    }

    /// Number of live nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.live).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arena slots, tombstones included
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    pub fn find_child(&self, parent: DisplayNodeId, name: &str) -> Option<DisplayNodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&c| self.name(c) == name)
    }

    /// Rebuild the arena from live nodes only, numbered in pre-order.
    ///
    /// Consumes the tree: ids issued before compaction mean nothing in the
    /// result.
    pub fn into_compacted(self) -> DisplayTree {
        let mut nodes = Vec::with_capacity(self.len());
        self.copy_live(self.root(), None, &mut nodes);
        DisplayTree { nodes }
    }

    fn copy_live(
        &self,
        id: DisplayNodeId,
        parent: Option<DisplayNodeId>,
        out: &mut Vec<DisplayNode>,
    ) -> DisplayNodeId {
        let new_id = DisplayNodeId(out.len());
        out.push(DisplayNode {
            name: self.name(id).to_string(),
            parent,
            children: Vec::new(),
            live: true,
        });
        for &child in self.children(id) {
            let copied = self.copy_live(child, Some(new_id), out);
            out[new_id.0].children.push(copied);
        }
        new_id
    }

    pub fn add_child(&mut self, parent: DisplayNodeId, name: impl Into<String>) -> DisplayNodeId {
        let id = DisplayNodeId(self.nodes.len());
        self.nodes.push(DisplayNode {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
            live: true,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Detach and discard every descendant of `id`. Returns how many nodes
    /// were removed.
    pub fn clear_children(&mut self, id: DisplayNodeId) -> usize {
        let children = std::mem::take(&mut self.nodes[id.0].children);
        let mut removed = 0;
        for child in children {
            removed += self.clear_children(child) + 1;
            let node = &mut self.nodes[child.0];
            node.live = false;
            node.parent = None;
        }
        removed
    }

    /// Replace all children of `id` with a single chain of nodes named by
    /// `path`. Returns the deepest new node, or `None` for an empty path.
    pub fn replace_children<S: AsRef<str>>(
        &mut self,
        id: DisplayNodeId,
        path: &[S],
    ) -> Option<DisplayNodeId> {
        self.clear_children(id);
        let mut current = id;
        let mut deepest = None;
        for name in path {
            current = self.add_child(current, name.as_ref());
            deepest = Some(current);
        }
        deepest
    }

    /// Live nodes in pre-order
    pub fn pre_order(&self) -> Vec<DisplayNodeId> {
        let mut out = Vec::new();
        self.collect_pre_order(self.root(), &mut out);
        out
    }

    fn collect_pre_order(&self, id: DisplayNodeId, out: &mut Vec<DisplayNodeId>) {
        out.push(id);
        for &child in self.children(id) {
            self.collect_pre_order(child, out);
        }
    }

    /// Names of leaf nodes in pre-order
    pub fn leaf_names(&self) -> Vec<&str> {
        self.pre_order()
            .into_iter()
            .filter(|&id| self.is_leaf(id))
            .map(|id| self.name(id))
            .collect()
    }

    /// Leaf nodes strictly below `id`
    pub fn leaves_below(&self, id: DisplayNodeId) -> Vec<DisplayNodeId> {
        let mut out = Vec::new();
        for &child in self.children(id) {
            self.collect_pre_order(child, &mut out);
        }
        out.retain(|&n| self.is_leaf(n));
        out
    }

    pub fn depth(&self, id: DisplayNodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// Pre-order rendering with connector glyphs, one node per line
    pub fn render(&self, glyphs: &TreeGlyphs) -> String {
        render_lines(
            self.root(),
            |id| self.name(id),
            |id| self.children(id).to_vec(),
            glyphs,
        )
        .join("\n")
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        self.snapshot_from(self.root())
    }

    fn snapshot_from(&self, id: DisplayNodeId) -> DisplaySnapshot {
        DisplaySnapshot {
            name: self.name(id).to_string(),
            children: self
                .children(id)
                .iter()
                .map(|&c| self.snapshot_from(c))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_renders_root_only() {
        let tree = DisplayTree::new("Selected Parameters");
        assert_eq!(tree.render(&TreeGlyphs::UNICODE), "Selected Parameters");
        assert_eq!(tree.leaf_names(), ["Selected Parameters"]);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn replace_children_discards_previous_subtree() {
        let mut tree = DisplayTree::new("Selected Parameters");
        let movement = tree.add_child(tree.root(), "MajorMovement");

        let arc = tree.replace_children(movement, &["Path", "Arc"]).unwrap();
        let path = tree.parent(arc).unwrap();
        assert_eq!(tree.depth(arc), 3);

        let hold = tree.replace_children(movement, &["Hold"]).unwrap();

        assert!(!tree.is_live(arc));
        assert!(!tree.is_live(path));
        assert!(tree.is_live(hold));
        assert_eq!(tree.children(movement), [hold]);
        assert_eq!(tree.len(), 3);
        // Ids are never reused.
        assert_ne!(hold, arc);
        assert_ne!(hold, path);
    }

    #[test]
    fn compaction_drops_tombstones() {
        let mut tree = DisplayTree::new("Selected Parameters");
        let quality = tree.add_child(tree.root(), "Quality");
        let movement = tree.add_child(tree.root(), "MajorMovement");
        for _ in 0..50 {
            tree.replace_children(quality, &["High"]);
            tree.replace_children(quality, &["Low"]);
        }
        tree.replace_children(movement, &["Path", "Arc"]);
        assert_eq!(tree.arena_len(), 3 + 100 + 2);
        let before = tree.render(&TreeGlyphs::UNICODE);

        let tree = tree.into_compacted();

        assert_eq!(tree.arena_len(), tree.len());
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.render(&TreeGlyphs::UNICODE), before);
        let movement = tree.find_child(tree.root(), "MajorMovement").unwrap();
        let path = tree.find_child(movement, "Path").unwrap();
        assert_eq!(tree.parent(path), Some(movement));
        assert_eq!(tree.leaf_names(), ["Low", "Arc"]);
    }

    #[test]
    fn clear_children_counts_removed_nodes() {
        let mut tree = DisplayTree::new("root");
        let a = tree.add_child(tree.root(), "a");
        tree.replace_children(a, &["b", "c", "d"]);

        assert_eq!(tree.clear_children(a), 3);
        assert!(tree.is_leaf(a));
        assert_eq!(tree.replace_children::<&str>(a, &[]), None);
    }

    #[test]
    fn leaves_below_excludes_the_node_itself() {
        let mut tree = DisplayTree::new("root");
        let quality = tree.add_child(tree.root(), "Quality");

        assert!(tree.leaves_below(quality).is_empty());
        let high = tree.replace_children(quality, &["High"]).unwrap();
        assert_eq!(tree.leaves_below(quality), [high]);
    }

    #[test]
    fn renders_selected_paths() {
        let mut tree = DisplayTree::new("Selected Parameters");
        let quality = tree.add_child(tree.root(), "Quality");
        let movement = tree.add_child(tree.root(), "MajorMovement");
        tree.add_child(tree.root(), "MajorLocation");
        tree.replace_children(quality, &["High"]);
        tree.replace_children(movement, &["Path", "Arc"]);

        insta::assert_snapshot!(tree.render(&TreeGlyphs::UNICODE), @r"
        Selected Parameters
        ├── Quality
        │   └── High
        ├── MajorMovement
        │   └── Path
        │       └── Arc
        └── MajorLocation
        ");
    }

    #[test]
    fn snapshot_serializes_nested() {
        let mut tree = DisplayTree::new("Selected Parameters");
        let quality = tree.add_child(tree.root(), "Quality");
        tree.replace_children(quality, &["Low"]);

        let json = serde_json::to_value(tree.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Selected Parameters",
                "children": [{"name": "Quality", "children": [{"name": "Low"}]}]
            })
        );
    }
}
