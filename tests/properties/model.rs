//! Property tests for parameter model construction.

use proptest::prelude::*;

use paramtree::model::{ParameterDefinition, ParameterTreeModel};
use paramtree::ParamError;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9]{0,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: category order is definition order, on every iteration.
    #[test]
    fn property_category_order_is_preserved(
        names in proptest::collection::hash_set(name(), 0..8)
    ) {
        let names: Vec<String> = names
            .into_iter()
            .filter(|n| n != "Parameters")
            .collect();
        let model = ParameterTreeModel::build(
            names.iter().map(|n| ParameterDefinition::with_values(n.clone(), ["v"])),
        );

        // Distinct category names never conflict; the shared value "v" sits
        // under different parents.
        let model = model.unwrap();
        let first: Vec<&str> = model.category_names().collect();
        let second: Vec<&str> = model.into_iter().collect();
        prop_assert_eq!(&first, &names.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: a duplicated sibling name always fails with NameConflict.
    #[test]
    fn property_duplicate_siblings_conflict(dup in name(), other in name()) {
        prop_assume!(dup != other);

        let result = ParameterTreeModel::build([ParameterDefinition::with_values(
            "Quality",
            [dup.clone(), other, dup],
        )]);
        let is_name_conflict = matches!(result, Err(ParamError::NameConflict { .. }));
        prop_assert!(is_name_conflict);
    }
}

#[test]
fn order_of_sample_categories() {
    let model = ParameterTreeModel::build([
        ParameterDefinition::with_values("Quality", ["High"]),
        ParameterDefinition::with_values("MajorMovement", ["Arc"]),
        ParameterDefinition::with_values("MajorLocation", ["Head"]),
    ])
    .unwrap();

    assert_eq!(
        model.category_names().collect::<Vec<_>>(),
        ["Quality", "MajorMovement", "MajorLocation"]
    );
}
