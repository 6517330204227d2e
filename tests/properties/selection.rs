//! Property tests for exclusive selection and display-tree sync.

use proptest::prelude::*;

use paramtree::dialog::{DialogOptions, ParameterDialog};
use paramtree::model::{ParameterDefinition, ParameterTreeModel};
use paramtree::selection::{CategoryState, ItemId};

/// A small model with a flat category, a nested category and a mixed one.
fn model() -> ParameterTreeModel {
    ParameterTreeModel::build([
        ParameterDefinition::with_values("Quality", ["High", "Medium", "Low"]),
        ParameterDefinition::category(
            "MajorMovement",
            [
                ParameterDefinition::with_values("Path", ["Straight", "Arc", "Circle"]),
                ParameterDefinition::with_values("Local", ["Wiggle", "Flick"]),
            ],
        ),
        ParameterDefinition::category(
            "MajorLocation",
            [
                ParameterDefinition::value("Neutral"),
                ParameterDefinition::with_values("Head", ["Forehead", "Chin"]),
            ],
        ),
    ])
    .unwrap()
}

fn leaves(dialog: &ParameterDialog) -> Vec<ItemId> {
    let tree = dialog.tree();
    tree.pre_order()
        .into_iter()
        .filter(|&id| tree.is_leaf(id) && tree.parent(id).is_some())
        .collect()
}

/// Sequences of (leaf index, checked) toggles
fn toggles() -> impl Strategy<Value = Vec<(usize, bool)>> {
    proptest::collection::vec((0usize..64, any::<bool>()), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: at most one member of any group is checked, and a checked
    /// toggle leaves exactly that member checked in its group.
    #[test]
    fn property_groups_are_exclusive(ops in toggles()) {
        let mut dialog = ParameterDialog::new(model(), DialogOptions::default());
        let leaves = leaves(&dialog);

        for (index, checked) in ops {
            let item = leaves[index % leaves.len()];
            dialog.set_checked(item, checked).unwrap();

            for group in dialog.groups().iter() {
                let count = group
                    .members()
                    .iter()
                    .filter(|&&m| dialog.tree().is_checked(m))
                    .count();
                prop_assert!(count <= 1, "group {} has {} checked", group.name(), count);
            }

            if checked {
                prop_assert!(dialog.tree().is_checked(item));
                let parent = dialog.tree().parent(item).unwrap();
                let group = dialog.groups().for_parent(parent).unwrap();
                for &member in group.members() {
                    prop_assert_eq!(dialog.tree().is_checked(member), member == item);
                }
            }
        }
    }

    /// PROPERTY: every category subtree of the display tree holds at most one
    /// leaf, and it matches the checked item of that category.
    #[test]
    fn property_display_holds_single_selection(ops in toggles()) {
        let mut dialog = ParameterDialog::new(model(), DialogOptions::default());
        let leaves = leaves(&dialog);

        for (index, checked) in ops {
            dialog.set_checked(leaves[index % leaves.len()], checked).unwrap();
        }

        let display = dialog.choices().display_tree();
        for &category in display.children(display.root()) {
            let below = display.leaves_below(category);
            prop_assert!(below.len() <= 1);

            let name = display.name(category);
            match dialog.choices().state(name) {
                Some(CategoryState::Selected { leaf }) => {
                    prop_assert_eq!(below.len(), 1);
                    prop_assert_eq!(display.name(below[0]), dialog.tree().label(leaf).unwrap());
                    prop_assert!(dialog.tree().is_checked(leaf));
                }
                _ => {
                    prop_assert!(below.is_empty());
                }
            }
        }
    }

    /// PROPERTY: the terminal list equals the display leaves that are model
    /// values, in pre-order.
    #[test]
    fn property_terminal_values_match_display_leaves(ops in toggles()) {
        let model = model();
        let mut dialog = ParameterDialog::new(model.clone(), DialogOptions::default());
        let leaves = leaves(&dialog);

        for (index, checked) in ops {
            dialog.set_checked(leaves[index % leaves.len()], checked).unwrap();

            let expected: Vec<String> = dialog
                .choices()
                .display_tree()
                .leaf_names()
                .into_iter()
                .filter(|name| model.is_leaf_name(name))
                .map(str::to_string)
                .collect();
            prop_assert_eq!(dialog.choices().terminal_values(), expected.as_slice());
        }
    }

    /// PROPERTY: re-checking the selected leaf changes nothing.
    #[test]
    fn property_reselect_is_idempotent(ops in toggles(), pick in 0usize..64) {
        let mut dialog = ParameterDialog::new(model(), DialogOptions::default());
        let leaves = leaves(&dialog);

        for (index, checked) in ops {
            dialog.set_checked(leaves[index % leaves.len()], checked).unwrap();
        }
        let item = leaves[pick % leaves.len()];
        dialog.set_checked(item, true).unwrap();

        let rendered = dialog.choices().rendered().to_string();
        let terminals = dialog.choices().terminal_values().to_vec();
        let checked = dialog.tree().checked_items();

        prop_assert!(!dialog.set_checked(item, true).unwrap());
        prop_assert_eq!(dialog.choices().rendered(), rendered.as_str());
        prop_assert_eq!(dialog.choices().terminal_values(), terminals.as_slice());
        prop_assert_eq!(dialog.tree().checked_items(), checked);
    }
}
