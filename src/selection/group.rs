//! Choice groups: sibling leaves of which at most one may be checked.

use std::collections::HashMap;

use super::checkable::ItemId;

/// Stable identifier of a [`ChoiceGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The leaf children of one parent item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    id: GroupId,
    name: String,
    category: String,
    parent: ItemId,
    members: Vec<ItemId>,
}

impl ChoiceGroup {
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Label of the immediate parent
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level category the group lives under
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn parent(&self) -> ItemId {
        self.parent
    }

    pub fn members(&self) -> &[ItemId] {
        &self.members
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.members.contains(&item)
    }
}

/// All choice groups of a checkable tree, fixed after construction
#[derive(Debug, Clone, Default)]
pub struct ChoiceGroups {
    groups: Vec<ChoiceGroup>,
    by_parent: HashMap<ItemId, GroupId>,
}

impl ChoiceGroups {
    pub(crate) fn push(
        &mut self,
        name: &str,
        category: &str,
        parent: ItemId,
        members: Vec<ItemId>,
    ) -> GroupId {
        let id = GroupId(self.groups.len());
        self.groups.push(ChoiceGroup {
            id,
            name: name.to_string(),
            category: category.to_string(),
            parent,
            members,
        });
        self.by_parent.insert(parent, id);
        id
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, id: GroupId) -> Option<&ChoiceGroup> {
        self.groups.get(id.0)
    }

    /// The group formed by the leaf children of `parent`
    pub fn for_parent(&self, parent: ItemId) -> Option<&ChoiceGroup> {
        self.by_parent.get(&parent).and_then(|&id| self.get(id))
    }

    /// Groups whose parent carries `name`
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ChoiceGroup> + 'a {
        self.groups.iter().filter(move |g| g.name == name)
    }

    /// Groups under the top-level category `category`
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ChoiceGroup> + 'a {
        self.groups.iter().filter(move |g| g.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChoiceGroup> {
        self.groups.iter()
    }
}
