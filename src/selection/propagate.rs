//! Exclusivity propagation over the checkable tree.
//!
//! Checking a leaf unchecks every other member of its choice group, and any
//! other checked leaf of the same top-level category, so the tree never shows
//! more than one choice per category. All writes happen before the
//! notifications are handed back; observers run afterwards and cannot
//! re-enter the propagation.

use super::checkable::{CheckableTree, ItemId};
use super::group::{ChoiceGroups, GroupId};

/// Why a check-state notification was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOrigin {
    /// The user acted on this item
    Explicit,
    /// Side effect of enforcing exclusivity on a sibling
    Propagated,
}

/// A check-state notification for one leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEvent {
    pub group: GroupId,
    pub item: ItemId,
    pub checked: bool,
    pub origin: ToggleOrigin,
}

impl ToggleEvent {
    pub fn is_explicit(&self) -> bool {
        self.origin == ToggleOrigin::Explicit
    }
}

/// Apply a user check-state change to `item` and return the notifications.
///
/// Items that belong to no group (branches, unknown ids) produce nothing.
pub fn propagate_check(
    tree: &mut CheckableTree,
    groups: &ChoiceGroups,
    item: ItemId,
    checked: bool,
) -> Vec<ToggleEvent> {
    if !tree.is_leaf(item) {
        return Vec::new();
    }
    let Some(group) = tree.parent(item).and_then(|p| groups.for_parent(p)) else {
        tracing::trace!(item = item.index(), "check change outside any choice group");
        return Vec::new();
    };

    if !checked {
        tree.write_check(item, false);
        return vec![ToggleEvent {
            group: group.id(),
            item,
            checked: false,
            origin: ToggleOrigin::Explicit,
        }];
    }

    for &member in group.members() {
        tree.write_check(member, member == item);
    }

    let mut echoes = Vec::new();
    for other in groups
        .in_category(group.category())
        .filter(|g| g.id() != group.id())
    {
        for &member in other.members() {
            if tree.write_check(member, false) {
                echoes.push(ToggleEvent {
                    group: other.id(),
                    item: member,
                    checked: false,
                    origin: ToggleOrigin::Propagated,
                });
            }
        }
    }

    let mut events: Vec<ToggleEvent> = group
        .members()
        .iter()
        .map(|&member| {
            if member == item {
                ToggleEvent {
                    group: group.id(),
                    item,
                    checked: true,
                    origin: ToggleOrigin::Explicit,
                }
            } else {
                ToggleEvent {
                    group: group.id(),
                    item: member,
                    checked: false,
                    origin: ToggleOrigin::Propagated,
                }
            }
        })
        .collect();
    events.extend(echoes);

    tracing::debug!(
        group = group.name(),
        category = group.category(),
        notifications = events.len(),
        "propagated check"
    );
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParameterDefinition, ParameterTreeModel};
    use crate::selection::SelectionTreeBuilder;

    fn setup() -> (CheckableTree, ChoiceGroups) {
        let model = ParameterTreeModel::build([
            ParameterDefinition::with_values("Quality", ["High", "Medium", "Low"]),
            ParameterDefinition::category(
                "MajorMovement",
                [
                    ParameterDefinition::with_values("Path", ["Straight", "Arc"]),
                    ParameterDefinition::with_values("Local", ["Wiggle", "Flick"]),
                ],
            ),
        ])
        .unwrap();
        SelectionTreeBuilder::build(&model)
    }

    #[test]
    fn checking_unchecks_siblings() {
        let (mut tree, groups) = setup();
        let high = tree.find_leaf("High").unwrap();
        let low = tree.find_leaf("Low").unwrap();

        propagate_check(&mut tree, &groups, high, true);
        let events = propagate_check(&mut tree, &groups, low, true);

        assert!(tree.is_checked(low));
        assert!(!tree.is_checked(high));
        assert_eq!(events.len(), 3);
        let explicit: Vec<_> = events.iter().filter(|e| e.is_explicit()).collect();
        assert_eq!(explicit.len(), 1);
        assert_eq!(explicit[0].item, low);
        assert!(explicit[0].checked);
        assert!(events
            .iter()
            .filter(|e| !e.is_explicit())
            .all(|e| !e.checked));
    }

    #[test]
    fn checking_clears_other_groups_of_same_category() {
        let (mut tree, groups) = setup();
        let arc = tree.find_leaf("Arc").unwrap();
        let flick = tree.find_leaf("Flick").unwrap();
        let high = tree.find_leaf("High").unwrap();

        propagate_check(&mut tree, &groups, high, true);
        propagate_check(&mut tree, &groups, arc, true);
        let events = propagate_check(&mut tree, &groups, flick, true);

        assert!(tree.is_checked(flick));
        assert!(!tree.is_checked(arc));
        // Other categories are untouched.
        assert!(tree.is_checked(high));
        assert!(events
            .iter()
            .any(|e| e.item == arc && !e.checked && e.origin == ToggleOrigin::Propagated));
    }

    #[test]
    fn unchecking_only_touches_the_item() {
        let (mut tree, groups) = setup();
        let high = tree.find_leaf("High").unwrap();

        propagate_check(&mut tree, &groups, high, true);
        let events = propagate_check(&mut tree, &groups, high, false);

        assert!(!tree.is_checked(high));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].origin, ToggleOrigin::Explicit);
        assert!(!events[0].checked);
    }

    #[test]
    fn branches_are_a_no_op() {
        let (mut tree, groups) = setup();
        let quality = tree.roots()[0];

        assert!(propagate_check(&mut tree, &groups, quality, true).is_empty());
        assert!(tree.checked_items().is_empty());
    }

    #[test]
    fn leaf_without_group_is_a_no_op() {
        let (mut tree, _) = setup();
        let high = tree.find_leaf("High").unwrap();

        let events = propagate_check(&mut tree, &ChoiceGroups::default(), high, true);
        assert!(events.is_empty());
        assert!(!tree.is_checked(high));
    }
}
