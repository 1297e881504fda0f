//! Tests for the equivalence partitioner.

use super::*;

const AA: ToolchainKey<'static> = ToolchainKey::new("cpuA", "compilerA");
const BA: ToolchainKey<'static> = ToolchainKey::new("cpuB", "compilerA");
const CA: ToolchainKey<'static> = ToolchainKey::new("cpuC", "compilerA");
const CB: ToolchainKey<'static> = ToolchainKey::new("cpuC", "compilerB");
const DA: ToolchainKey<'static> = ToolchainKey::new("cpuD", "compilerA");

#[test]
fn identical_values_collapse_to_one_class() {
    let classes = partition([(AA, "x"), (BA, "x"), (CA, "x")]);

    assert_eq!(classes.len(), 1);
    assert_eq!(classes.first().map(|class| class.keys.clone()), Some(vec![AA, BA, CA]));
}

#[test]
fn classes_follow_first_member_order_not_value_order() {
    let classes = partition([(AA, "zeta"), (BA, "alpha"), (CA, "zeta")]);
    let values: Vec<&str> = classes.iter().map(|class| class.value).collect();

    assert_eq!(values, vec!["zeta", "alpha"]);
}

#[test]
fn lists_with_same_elements_in_different_order_are_distinct() {
    let classes = partition([(AA, vec!["a", "b"]), (BA, vec!["b", "a"]), (CA, vec!["a", "b"])]);

    assert_eq!(classes.len(), 2);
    assert_eq!(classes.first().map(|class| class.keys.clone()), Some(vec![AA, CA]));
}

#[test]
fn absent_optional_values_form_a_class() {
    let classes = partition([(AA, Some("osA")), (BA, None), (CA, None)]);

    assert_eq!(classes.len(), 2);
    assert_eq!(classes.last().map(|class| class.value), Some(None));
    assert_eq!(classes.last().map(|class| class.keys.clone()), Some(vec![BA, CA]));
}

#[test]
fn every_key_lands_in_exactly_one_class() {
    let entries = [(AA, 1), (BA, 2), (CA, 1), (CB, 3), (DA, 2)];
    let classes = partition(entries);

    let mut members: Vec<ToolchainKey<'_>> =
        classes.iter().flat_map(|class| class.keys.iter().copied()).collect();
    members.sort();
    let mut expected: Vec<ToolchainKey<'_>> = entries.iter().map(|(key, _)| *key).collect();
    expected.sort();
    assert_eq!(members, expected);
}

#[test]
fn empty_input_yields_no_classes() {
    let classes = partition(std::iter::empty::<(ToolchainKey<'static>, u8)>());
    assert!(classes.is_empty());
}

#[test]
fn map_values_keeps_membership() {
    let classes = map_values(partition([(AA, 1), (BA, 1), (CA, 2)]), |value| value * 10);

    assert_eq!(classes.len(), 2);
    assert_eq!(classes.first().map(|class| class.value), Some(10));
    assert_eq!(classes.first().map(|class| class.keys.clone()), Some(vec![AA, BA]));
}
