//! ParameterDialog state management and action handling.
//!
//! The dialog owns the parameter model, the checkable tree with its choice
//! groups, and the synchronizer. User actions go through
//! [`ParameterDialog::handle_action`]; check-state notifications produced by
//! the tree are forwarded to the synchronizer and then to registered
//! callbacks.

use crate::error::{ParamError, ParamResult};
use crate::model::ParameterTreeModel;
use crate::selection::{
    propagate_check, CheckableTree, ChoiceGroups, ChoiceTree, Closed, ItemId,
    SelectionTreeBuilder, ToggleEvent, VisibleItem,
};
use crate::text_tree::TreeGlyphs;

use super::render::{render_dialog, render_help_bar, render_status_bar};

/// Dialog action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Click the checkbox of the current item (expands/collapses branches)
    Toggle,
    /// Click the label of the current item
    Click,
    /// Expand node
    Expand,
    /// Collapse node
    Collapse,
    /// Expand every branch
    ExpandAll,
    /// Close and keep the selection
    Accept,
    /// Close and discard the selection
    Cancel,
}

/// What the caller should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Pending,
    Accepted,
    Cancelled,
}

/// Presentation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOptions {
    pub title: String,
    pub unicode: bool,
    pub color: bool,
    pub expand_all: bool,
    pub show_terminal_values: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            title: "Select Parameters".to_string(),
            unicode: true,
            color: false,
            expand_all: false,
            show_terminal_values: true,
        }
    }
}

type ItemCallback = Box<dyn FnMut(ItemId, &str)>;
type ToggleCallback = Box<dyn FnMut(&ToggleEvent)>;
type CloseCallback = Box<dyn FnOnce(&Closed)>;

/// Modal parameter selection dialog
pub struct ParameterDialog {
    model: ParameterTreeModel,
    tree: CheckableTree,
    groups: ChoiceGroups,
    choices: ChoiceTree,
    options: DialogOptions,
    /// Current cursor position in the visible rows
    cursor: usize,
    /// Cached visible rows for rendering
    visible: Vec<VisibleItem>,
    on_current_item_changed: Vec<ItemCallback>,
    on_check_state_changed: Vec<ToggleCallback>,
    on_close: Option<CloseCallback>,
}

impl ParameterDialog {
    pub fn new(model: ParameterTreeModel, options: DialogOptions) -> Self {
        let (mut tree, groups) = SelectionTreeBuilder::build(&model);
        if options.expand_all {
            tree.expand_all();
        }
        let choices = ChoiceTree::new(&model, TreeGlyphs::for_unicode(options.unicode));

        let mut dialog = Self {
            model,
            tree,
            groups,
            choices,
            options,
            cursor: 0,
            visible: Vec::new(),
            on_current_item_changed: Vec::new(),
            on_check_state_changed: Vec::new(),
            on_close: None,
        };
        dialog.rebuild_visible();
        dialog
    }

    /// Rebuild the visible rows
    fn rebuild_visible(&mut self) {
        self.visible = self.tree.visible_items();
        // Ensure cursor is within bounds
        if !self.visible.is_empty() && self.cursor >= self.visible.len() {
            self.cursor = self.visible.len() - 1;
        }
    }

    pub fn model(&self) -> &ParameterTreeModel {
        &self.model
    }

    pub fn tree(&self) -> &CheckableTree {
        &self.tree
    }

    pub fn groups(&self) -> &ChoiceGroups {
        &self.groups
    }

    pub fn choices(&self) -> &ChoiceTree {
        &self.choices
    }

    pub fn options(&self) -> &DialogOptions {
        &self.options
    }

    pub fn visible_items(&self) -> &[VisibleItem] {
        &self.visible
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Item under the cursor
    pub fn current_item(&self) -> Option<ItemId> {
        self.visible.get(self.cursor).map(|v| v.id)
    }

    /// Register a "current item changed" observer (cursor moves, label clicks)
    pub fn on_current_item_changed(&mut self, callback: impl FnMut(ItemId, &str) + 'static) {
        self.on_current_item_changed.push(Box::new(callback));
    }

    /// Register a check-state observer; it sees every notification, echoes
    /// included, after the tree has been updated
    pub fn on_check_state_changed(&mut self, callback: impl FnMut(&ToggleEvent) + 'static) {
        self.on_check_state_changed.push(Box::new(callback));
    }

    /// Register the close observer, fired once by [`ParameterDialog::close`]
    pub fn on_close(&mut self, callback: impl FnOnce(&Closed) + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// Handle a dialog action
    pub fn handle_action(&mut self, action: DialogAction) -> ParamResult<DialogOutcome> {
        match action {
            DialogAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.notify_current_item();
                }
            }
            DialogAction::Down => {
                if self.cursor + 1 < self.visible.len() {
                    self.cursor += 1;
                    self.notify_current_item();
                }
            }
            DialogAction::Toggle => {
                if let Some(id) = self.current_item() {
                    if self.tree.is_leaf(id) {
                        let checked = self.tree.is_checked(id);
                        self.set_checked(id, !checked)?;
                    } else {
                        self.tree.toggle_expand(id);
                        self.rebuild_visible();
                    }
                }
            }
            DialogAction::Click => {
                if let Some(id) = self.current_item() {
                    self.click(id);
                }
            }
            DialogAction::Expand => {
                if let Some(id) = self.current_item() {
                    self.tree.expand(id);
                }
                self.rebuild_visible();
            }
            DialogAction::Collapse => {
                if let Some(id) = self.current_item() {
                    self.tree.collapse(id);
                }
                self.rebuild_visible();
            }
            DialogAction::ExpandAll => {
                self.tree.expand_all();
                self.rebuild_visible();
            }
            DialogAction::Accept => return Ok(DialogOutcome::Accepted),
            DialogAction::Cancel => return Ok(DialogOutcome::Cancelled),
        }
        Ok(DialogOutcome::Pending)
    }

    /// Checkbox click: set a leaf's check state and sync the display tree.
    ///
    /// Returns whether the selection changed. An inconsistent item is
    /// rejected before any check state is written.
    pub fn set_checked(&mut self, item: ItemId, checked: bool) -> ParamResult<bool> {
        if self.tree.is_leaf(item) {
            if let Some(group) = self.tree.parent(item).and_then(|p| self.groups.for_parent(p)) {
                self.choices.check_target(&self.groups, group.id(), item)?;
            }
        }

        let events = propagate_check(&mut self.tree, &self.groups, item, checked);

        let mut changed = false;
        for event in &events {
            changed |= self.choices.toggle(&self.tree, &self.groups, event)?;
            for callback in &mut self.on_check_state_changed {
                callback(event);
            }
        }

        self.rebuild_visible();
        Ok(changed)
    }

    /// Check a leaf given by label (`"High"`) or path (`"Quality/High"`)
    pub fn check(&mut self, label: &str) -> ParamResult<bool> {
        let item = self.resolve(label)?;
        self.set_checked(item, true)
    }

    /// Uncheck a leaf given by label or path
    pub fn uncheck(&mut self, label: &str) -> ParamResult<bool> {
        let item = self.resolve(label)?;
        self.set_checked(item, false)
    }

    fn resolve(&self, label: &str) -> ParamResult<ItemId> {
        self.tree
            .find_leaf(label)
            .ok_or_else(|| ParamError::UnknownItem {
                label: label.to_string(),
            })
    }

    /// Label click. Moves the cursor to the item if it is visible and fires
    /// "current item changed"; never touches check state.
    pub fn click(&mut self, item: ItemId) {
        if let Some(row) = self.visible.iter().position(|v| v.id == item) {
            self.cursor = row;
        }
        if let Some(label) = self.tree.label(item) {
            for callback in &mut self.on_current_item_changed {
                callback(item, label);
            }
        }
    }

    fn notify_current_item(&mut self) {
        let Some(row) = self.visible.get(self.cursor) else {
            return;
        };
        for callback in &mut self.on_current_item_changed {
            callback(row.id, &row.label);
        }
    }

    /// Close the dialog and fire the close event
    pub fn close(self, accepted: bool) -> Closed {
        let closed = self.choices.finalize(accepted);
        tracing::debug!(
            accepted,
            terminal_values = ?closed.terminal_values,
            "parameter dialog closed"
        );
        if let Some(callback) = self.on_close {
            callback(&closed);
        }
        closed
    }

    /// Render the three panes
    pub fn render(&self) -> String {
        render_dialog(self)
    }

    /// Render the status bar
    pub fn render_status_bar(&self) -> String {
        let selected = self.choices.selections().len();
        let total = self.model.categories().len();
        render_status_bar(selected, total, self.options.unicode)
    }

    /// Render the help bar
    pub fn render_help_bar(&self) -> String {
        render_help_bar(self.options.unicode)
    }
}
