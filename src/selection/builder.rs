//! Construction of the checkable tree from the parameter model.

use crate::model::{ParameterNode, ParameterTreeModel};

use super::checkable::{CheckableTree, ItemId, ItemKind};
use super::group::ChoiceGroups;

/// Walks a [`ParameterTreeModel`] once and produces the checkable tree plus
/// its choice groups.
pub struct SelectionTreeBuilder;

impl SelectionTreeBuilder {
    /// Every model node gets a parallel item in definition order. Leaves are
    /// checkable and start unchecked; the leaf children of each parent form
    /// one [`ChoiceGroup`](super::ChoiceGroup) named after that parent.
    pub fn build(model: &ParameterTreeModel) -> (CheckableTree, ChoiceGroups) {
        let mut tree = CheckableTree::default();
        let mut groups = ChoiceGroups::default();

        for category in model.categories() {
            let item = tree.push(None, category.name(), ItemKind::Branch);
            add_children(&mut tree, &mut groups, item, category, category.name());
        }

        tracing::debug!(
            items = tree.len(),
            groups = groups.len(),
            "built checkable selection tree"
        );

        (tree, groups)
    }
}

fn add_children(
    tree: &mut CheckableTree,
    groups: &mut ChoiceGroups,
    parent_item: ItemId,
    parent: &ParameterNode,
    category: &str,
) {
    let mut leaves = Vec::new();

    for child in parent.children() {
        if child.is_leaf() {
            let id = tree.push(
                Some(parent_item),
                child.name(),
                ItemKind::Leaf { checked: false },
            );
            leaves.push(id);
        } else {
            let id = tree.push(Some(parent_item), child.name(), ItemKind::Branch);
            add_children(tree, groups, id, child, category);
        }
    }

    // Mixed parents only group their leaves; leafless parents get no group.
    if !leaves.is_empty() {
        groups.push(parent.name(), category, parent_item, leaves);
    }
}
