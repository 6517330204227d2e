//! Selection state machine.
//!
//! Each top-level category is either unselected or holds exactly one chosen
//! leaf. The display tree mirrors that: a fixed node per category, below it
//! the path to the chosen leaf or nothing. After every change the text
//! rendering and the terminal-value list are regenerated.

use std::collections::{HashMap, HashSet};

use crate::error::{ParamError, ParamResult};
use crate::model::{ParameterTreeModel, DISPLAY_ROOT};
use crate::text_tree::TreeGlyphs;

use super::checkable::{CheckableTree, ItemId};
use super::display::{DisplayNodeId, DisplayTree};
use super::group::{ChoiceGroups, GroupId};
use super::propagate::{ToggleEvent, ToggleOrigin};

/// Selection state of one top-level category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryState {
    Unselected,
    Selected { leaf: ItemId },
}

/// Payload of the dialog's close event
#[derive(Debug, Clone)]
pub struct Closed {
    pub accepted: bool,
    pub display_tree: DisplayTree,
    /// Terminal values at the time of closing
    pub terminal_values: Vec<String>,
}

#[derive(Debug)]
pub struct ChoiceTree {
    display: DisplayTree,
    category_nodes: HashMap<String, DisplayNodeId>,
    states: HashMap<String, CategoryState>,
    leaf_names: HashSet<String>,
    glyphs: TreeGlyphs,
    rendered: String,
    terminal_values: Vec<String>,
}

impl ChoiceTree {
    /// One fixed display node per category, all unselected
    pub fn new(model: &ParameterTreeModel, glyphs: TreeGlyphs) -> Self {
        let mut display = DisplayTree::new(DISPLAY_ROOT);
        let mut category_nodes = HashMap::new();
        let mut states = HashMap::new();

        for name in model.category_names() {
            let node = display.add_child(display.root(), name);
            category_nodes.insert(name.to_string(), node);
            states.insert(name.to_string(), CategoryState::Unselected);
        }

        let mut tree = Self {
            display,
            category_nodes,
            states,
            leaf_names: model.leaf_names().clone(),
            glyphs,
            rendered: String::new(),
            terminal_values: Vec::new(),
        };
        tree.regenerate();
        tree
    }

    /// Apply one check-state notification.
    ///
    /// Returns `Ok(true)` when the selection changed. Propagated unchecks
    /// are visual echoes and never change anything.
    pub fn toggle(
        &mut self,
        tree: &CheckableTree,
        groups: &ChoiceGroups,
        event: &ToggleEvent,
    ) -> ParamResult<bool> {
        if !event.checked && event.origin == ToggleOrigin::Propagated {
            return Ok(false);
        }

        let category = self.target(groups, event.group, event.item)?;

        let changed = if event.checked {
            self.select(category, event.item, &tree.path_labels(event.item))?
        } else {
            self.deselect(category, event.item)?
        };

        if changed {
            self.regenerate();
            tracing::debug!(category, terminal_values = ?self.terminal_values, "selection changed");
        }
        Ok(changed)
    }

    /// Fail unless a notification for `item` in `group` could be applied.
    ///
    /// Lets callers reject an inconsistent change before writing any check
    /// state.
    pub fn check_target(
        &self,
        groups: &ChoiceGroups,
        group: GroupId,
        item: ItemId,
    ) -> ParamResult<()> {
        self.target(groups, group, item).map(|_| ())
    }

    fn target<'g>(
        &self,
        groups: &'g ChoiceGroups,
        group: GroupId,
        item: ItemId,
    ) -> ParamResult<&'g str> {
        let Some(found) = groups.get(group).filter(|g| g.contains(item)) else {
            tracing::error!(
                group = group.index(),
                item = item.index(),
                "toggle for an item outside its choice group"
            );
            return Err(ParamError::GroupLookupFailure {
                group: group.index(),
                item: item.index(),
            });
        };
        self.category_node(found.category())?;
        Ok(found.category())
    }

    fn select(&mut self, category: &str, leaf: ItemId, path: &[&str]) -> ParamResult<bool> {
        let node = self.category_node(category)?;
        if self.states.get(category) == Some(&CategoryState::Selected { leaf }) {
            return Ok(false);
        }

        self.display.replace_children(node, path);
        self.states
            .insert(category.to_string(), CategoryState::Selected { leaf });
        Ok(true)
    }

    fn deselect(&mut self, category: &str, leaf: ItemId) -> ParamResult<bool> {
        let node = self.category_node(category)?;
        if self.states.get(category) != Some(&CategoryState::Selected { leaf }) {
            return Ok(false);
        }

        self.display.clear_children(node);
        self.states
            .insert(category.to_string(), CategoryState::Unselected);
        Ok(true)
    }

    fn category_node(&self, category: &str) -> ParamResult<DisplayNodeId> {
        match self.category_nodes.get(category) {
            Some(&node) => Ok(node),
            None => {
                tracing::error!(category, "toggle for a category without a display node");
                Err(ParamError::LookupFailure {
                    category: category.to_string(),
                })
            }
        }
    }

    fn regenerate(&mut self) {
        self.rendered = self.display.render(&self.glyphs);
        self.terminal_values = self
            .display
            .leaf_names()
            .into_iter()
            .filter(|name| self.leaf_names.contains(*name))
            .map(str::to_string)
            .collect();
    }

    /// Switch glyph set and re-render
    pub fn set_glyphs(&mut self, glyphs: TreeGlyphs) {
        self.glyphs = glyphs;
        self.regenerate();
    }

    /// Text rendering of the display tree
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Display leaves that are parameter values of the model, in pre-order
    pub fn terminal_values(&self) -> &[String] {
        &self.terminal_values
    }

    pub fn display_tree(&self) -> &DisplayTree {
        &self.display
    }

    pub fn state(&self, category: &str) -> Option<CategoryState> {
        self.states.get(category).copied()
    }

    /// `(category, chosen value)` for every selected category, in display
    /// order
    pub fn selections(&self) -> Vec<(&str, &str)> {
        let root = self.display.root();
        self.display
            .children(root)
            .iter()
            .filter_map(|&category| {
                let leaf = self.display.leaves_below(category).into_iter().next()?;
                Some((self.display.name(category), self.display.name(leaf)))
            })
            .collect()
    }

    /// Hand back the display tree, whatever the outcome, with tombstoned
    /// nodes dropped
    pub fn finalize(self, accepted: bool) -> Closed {
        Closed {
            accepted,
            display_tree: self.display.into_compacted(),
            terminal_values: self.terminal_values,
        }
    }
}
