//! Checkable tree of every possible parameter choice.
//!
//! Items live in an arena and are addressed by [`ItemId`]. Branch items
//! (categories and sub-categories) are expandable and carry no check state;
//! leaf items carry a checked/unchecked state. Exclusivity between siblings is
//! not enforced here: see [`super::propagate`].

/// Stable identifier of an item in a [`CheckableTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What an item is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Expandable category, no check state
    Branch,
    /// Checkable value
    Leaf { checked: bool },
}

/// Visual selection state of an item (●/○/◐)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Checked leaf
    Selected,
    /// Unchecked leaf, or branch with nothing checked below
    Unselected,
    /// Branch with at least one checked leaf below
    Partial,
}

/// An item of the checkable tree
#[derive(Debug, Clone)]
pub struct CheckableItem {
    label: String,
    parent: Option<ItemId>,
    children: Vec<ItemId>,
    depth: usize,
    kind: ItemKind,
    expanded: bool,
}

impl CheckableItem {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parent(&self) -> Option<ItemId> {
        self.parent
    }

    pub fn children(&self) -> &[ItemId] {
        &self.children
    }

    /// 0 for top-level categories
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, ItemKind::Leaf { .. })
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.kind, ItemKind::Leaf { checked: true })
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// A row of the flattened, currently visible tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItem {
    pub id: ItemId,
    /// Depth level (0 = top-level category)
    pub depth: usize,
    pub label: String,
    pub state: SelectionState,
    pub checkable: bool,
    pub expanded: bool,
    pub has_children: bool,
}

/// Arena of checkable items
#[derive(Debug, Clone, Default)]
pub struct CheckableTree {
    items: Vec<CheckableItem>,
    roots: Vec<ItemId>,
}

impl CheckableTree {
    pub(crate) fn push(&mut self, parent: Option<ItemId>, label: &str, kind: ItemKind) -> ItemId {
        let id = ItemId(self.items.len());
        let depth = match parent {
            Some(p) => self.items[p.0].depth + 1,
            None => 0,
        };
        self.items.push(CheckableItem {
            label: label.to_string(),
            parent,
            children: Vec::new(),
            depth,
            kind,
            expanded: false,
        });
        match parent {
            Some(p) => self.items[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Top-level category items in definition order
    pub fn roots(&self) -> &[ItemId] {
        &self.roots
    }

    pub fn item(&self, id: ItemId) -> Option<&CheckableItem> {
        self.items.get(id.0)
    }

    pub fn label(&self, id: ItemId) -> Option<&str> {
        self.item(id).map(CheckableItem::label)
    }

    pub fn parent(&self, id: ItemId) -> Option<ItemId> {
        self.item(id).and_then(CheckableItem::parent)
    }

    pub fn is_leaf(&self, id: ItemId) -> bool {
        self.item(id).is_some_and(CheckableItem::is_leaf)
    }

    pub fn is_checked(&self, id: ItemId) -> bool {
        self.item(id).is_some_and(CheckableItem::is_checked)
    }

    /// Write a leaf's check state. Returns true if the state changed.
    ///
    /// Branches and unknown ids are left alone.
    pub(crate) fn write_check(&mut self, id: ItemId, checked: bool) -> bool {
        match self.items.get_mut(id.0) {
            Some(item) => match item.kind {
                ItemKind::Leaf { checked: current } if current != checked => {
                    item.kind = ItemKind::Leaf { checked };
                    true
                }
                _ => false,
            },
            None => false,
        }
    }

    /// The top-level category an item belongs to
    pub fn category_of(&self, id: ItemId) -> Option<ItemId> {
        let mut current = self.item(id).map(|_| id)?;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        Some(current)
    }

    /// Labels from below the top-level category down to the item itself.
    pub fn path_labels(&self, id: ItemId) -> Vec<&str> {
        let mut labels = Vec::new();
        let mut current = Some(id);
        while let Some(item_id) = current {
            let Some(item) = self.item(item_id) else {
                break;
            };
            if item.parent.is_none() {
                break;
            }
            labels.push(item.label.as_str());
            current = item.parent;
        }
        labels.reverse();
        labels
    }

    /// All items in pre-order
    pub fn pre_order(&self) -> Vec<ItemId> {
        let mut out = Vec::with_capacity(self.items.len());
        for &root in &self.roots {
            self.collect_pre_order(root, &mut out);
        }
        out
    }

    fn collect_pre_order(&self, id: ItemId, out: &mut Vec<ItemId>) {
        out.push(id);
        for &child in &self.items[id.0].children {
            self.collect_pre_order(child, out);
        }
    }

    pub fn checked_items(&self) -> Vec<ItemId> {
        self.pre_order()
            .into_iter()
            .filter(|&id| self.is_checked(id))
            .collect()
    }

    /// Resolve a leaf by label.
    ///
    /// `"High"` finds the first leaf labelled `High` in pre-order;
    /// `"Quality/High"` matches the full path from the category.
    pub fn find_leaf(&self, label: &str) -> Option<ItemId> {
        let wanted: Vec<&str> = label.split('/').map(str::trim).collect();
        self.pre_order().into_iter().find(|&id| {
            if !self.is_leaf(id) {
                return false;
            }
            if wanted.len() == 1 {
                return self.label(id) == Some(wanted[0]);
            }
            let mut full = Vec::with_capacity(wanted.len());
            if let Some(category) = self.category_of(id).and_then(|c| self.label(c)) {
                full.push(category);
            }
            full.extend(self.path_labels(id));
            full == wanted
        })
    }

    pub fn selection_state(&self, id: ItemId) -> SelectionState {
        let Some(item) = self.item(id) else {
            return SelectionState::Unselected;
        };
        match item.kind {
            ItemKind::Leaf { checked: true } => SelectionState::Selected,
            ItemKind::Leaf { checked: false } => SelectionState::Unselected,
            ItemKind::Branch => {
                if self.has_checked_descendant(id) {
                    SelectionState::Partial
                } else {
                    SelectionState::Unselected
                }
            }
        }
    }

    fn has_checked_descendant(&self, id: ItemId) -> bool {
        self.items[id.0]
            .children
            .iter()
            .any(|&c| self.is_checked(c) || self.has_checked_descendant(c))
    }

    pub fn expand(&mut self, id: ItemId) {
        if let Some(item) = self.items.get_mut(id.0) {
            if !item.children.is_empty() {
                item.expanded = true;
            }
        }
    }

    pub fn collapse(&mut self, id: ItemId) {
        if let Some(item) = self.items.get_mut(id.0) {
            item.expanded = false;
        }
    }

    pub fn toggle_expand(&mut self, id: ItemId) {
        let expanded = self.item(id).is_some_and(CheckableItem::is_expanded);
        if expanded {
            self.collapse(id);
        } else {
            self.expand(id);
        }
    }

    pub fn expand_all(&mut self) {
        for item in &mut self.items {
            if !item.children.is_empty() {
                item.expanded = true;
            }
        }
    }

    /// Flatten the visible part of the tree for rendering
    pub fn visible_items(&self) -> Vec<VisibleItem> {
        let mut out = Vec::new();
        for &root in &self.roots {
            self.flatten_visible(root, &mut out);
        }
        out
    }

    fn flatten_visible(&self, id: ItemId, out: &mut Vec<VisibleItem>) {
        let item = &self.items[id.0];
        out.push(VisibleItem {
            id,
            depth: item.depth,
            label: item.label.clone(),
            state: self.selection_state(id),
            checkable: item.is_leaf(),
            expanded: item.expanded,
            has_children: !item.children.is_empty(),
        });

        if item.expanded {
            for &child in &item.children {
                self.flatten_visible(child, out);
            }
        }
    }
}
