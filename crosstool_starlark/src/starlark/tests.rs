//! Layout tests for Starlark expression rendering.

use super::*;
use crate::model::{
    ActionConfig, ArtifactNamePattern, FlagGroup, FlagSet, MakeVariable, Tool, VariableWithValue,
    WithFeatureSet,
};
use rstest::rstest;

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

#[rstest]
#[case(Expr::List(vec![]), "[]")]
#[case(Expr::str_list(&["dirC"]), "[\"dirC\"]")]
#[case(Expr::str_list(&["dirC", "dirB"]), "[\"dirC\", \"dirB\"]")]
#[case(Expr::None, "None")]
#[case(Expr::Bool(true), "True")]
#[case(Expr::List(vec![Expr::ident("a_feature"), Expr::ident("b_feature")]), "[a_feature, b_feature]")]
fn scalars_and_short_lists_render_inline(#[case] expr: Expr, #[case] expected: &str) {
    assert_eq!(expr.render(4), expected);
}

#[test]
fn long_scalar_lists_break_one_element_per_line() {
    let dirs: Vec<String> = (0..6).map(|i| format!("/usr/lib/gcc/x86_64-linux-gnu/{i}/include")).collect();
    let rendered = Expr::str_list(&dirs).render(4);

    assert!(rendered.starts_with("[\n        \"/usr/lib/gcc/x86_64-linux-gnu/0/include\",\n"));
    assert!(rendered.ends_with(",\n    ]"));
    assert_eq!(rendered.lines().count(), 8);
}

#[test]
fn inline_width_counts_characters_not_bytes() {
    let dir = "é".repeat(35);
    let rendered = Expr::str_list(&[dir.as_str(), dir.as_str()]).render(4);

    assert_eq!(rendered.chars().count(), 78);
    assert!(!rendered.contains('\n'));
}

#[test]
fn two_scalar_arguments_stay_on_one_line() {
    let variable = MakeVariable {
        name: "A".to_owned(),
        value: "a/b/c".to_owned(),
    };
    assert_eq!(
        variable.to_starlark().render(4),
        "make_variable(name = \"A\", value = \"a/b/c\")"
    );
}

#[test]
fn three_scalar_arguments_break_across_lines() {
    let pattern = ArtifactNamePattern {
        category_name: "A".to_owned(),
        prefix: "p".to_owned(),
        extension: ".exe".to_owned(),
    };
    let expected = "\
artifact_name_pattern(
        category_name = \"A\",
        prefix = \"p\",
        extension = \".exe\",
    )";
    assert_eq!(pattern.to_starlark().render(4), expected);
}

#[test]
fn single_composite_element_list_wraps_when_element_is_multiline() {
    let pattern = ArtifactNamePattern {
        category_name: "A".to_owned(),
        prefix: "p".to_owned(),
        extension: ".exe".to_owned(),
    };
    let expected = "\
[
        artifact_name_pattern(
            category_name = \"A\",
            prefix = \"p\",
            extension = \".exe\",
        ),
    ]";
    assert_eq!(vec![pattern].to_starlark().render(4), expected);
}

#[test]
fn empty_tool_path_renders_placeholder() {
    let tool = Tool::default();
    assert_eq!(tool.to_starlark().render(0), "tool(path = \"NOT_USED\")");
}

#[test]
fn call_lookup_finds_keyword_arguments() {
    let call = Call::new("feature").str_arg("name", "A").flag_arg("enabled", false);
    assert_eq!(call.get("name"), Some(&Expr::str("A")));
    assert_eq!(call.get("enabled"), None);
}

fn complex_action_config() -> ActionConfig {
    let ab_not_cd = WithFeatureSet {
        features: owned(&["a", "b"]),
        not_features: owned(&["c", "d"]),
    };
    ActionConfig {
        config_name: "action-complex".to_owned(),
        action_name: "action-complex".to_owned(),
        enabled: true,
        tools: vec![
            Tool {
                tool_path: "/a/b/c".to_owned(),
                with_features: vec![
                    ab_not_cd.clone(),
                    WithFeatureSet {
                        features: owned(&["e"]),
                        not_features: vec![],
                    },
                ],
                execution_requirements: owned(&["a"]),
            },
            Tool::default(),
        ],
        flag_sets: vec![
            FlagSet {
                actions: vec![],
                with_features: vec![],
                flag_groups: vec![
                    FlagGroup {
                        flags: owned(&["a", "%b"]),
                        iterate_over: Some("c".to_owned()),
                        expand_if_all_available: owned(&["d"]),
                        expand_if_none_available: owned(&["e"]),
                        expand_if_true: Some("f".to_owned()),
                        expand_if_false: Some("g".to_owned()),
                        expand_if_equal: Some(VariableWithValue {
                            variable: "var".to_owned(),
                            value: "val".to_owned(),
                        }),
                        ..FlagGroup::default()
                    },
                    FlagGroup {
                        flag_groups: vec![FlagGroup {
                            flags: owned(&["a"]),
                            ..FlagGroup::default()
                        }],
                        ..FlagGroup::default()
                    },
                ],
            },
            FlagSet {
                with_features: vec![ab_not_cd],
                ..FlagSet::default()
            },
        ],
        implies: owned(&["a", "b"]),
    }
}

#[test]
fn nested_action_config_layout() {
    let expected = r#"    action_complex_action = action_config(
        action_name = "action-complex",
        enabled = True,
        flag_sets = [
            flag_set(
                flag_groups = [
                    flag_group(
                        flags = ["a", "%b"],
                        iterate_over = "c",
                        expand_if_available = "d",
                        expand_if_not_available = "e",
                        expand_if_true = "f",
                        expand_if_false = "g",
                        expand_if_equal = variable_with_value(name = "var", value = "val"),
                    ),
                    flag_group(flag_groups = [flag_group(flags = ["a"])]),
                ],
            ),
            flag_set(
                with_features = [
                    with_feature_set(
                        features = ["a", "b"],
                        not_features = ["c", "d"],
                    ),
                ],
            ),
        ],
        implies = ["a", "b"],
        tools = [
            tool(
                path = "/a/b/c",
                with_features = [
                    with_feature_set(
                        features = ["a", "b"],
                        not_features = ["c", "d"],
                    ),
                    with_feature_set(features = ["e"]),
                ],
                execution_requirements = ["a"],
            ),
            tool(path = "NOT_USED"),
        ],
    )"#;
    let rendered = format!(
        "    action_complex_action = {}",
        complex_action_config().to_starlark().render(4)
    );
    assert_eq!(rendered, expected);
}

#[test]
fn flag_set_actions_prefer_action_name_constants() {
    let flag_set = FlagSet {
        actions: owned(&["c-compile", "custom-action"]),
        ..FlagSet::default()
    };
    assert_eq!(
        flag_set.to_starlark().render(0),
        "flag_set(actions = [ACTION_NAMES.c_compile, \"custom-action\"])"
    );
}
