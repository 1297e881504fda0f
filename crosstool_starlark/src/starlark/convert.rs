//! Conversion of record values into Starlark constructor calls.
//!
//! Each implementation lists keyword arguments in the constructor's declared
//! order, skipping fields that hold their default value.

use super::{Call, Expr, action_name_expr};
use crate::model::{
    ActionConfig, ArtifactNamePattern, EnvEntry, EnvSet, Feature, FeatureSet, FlagGroup, FlagSet,
    MakeVariable, Tool, ToolPath, VariableWithValue, WithFeatureSet,
};

/// Path rendered for a tool slot that is never invoked.
pub const UNUSED_TOOL_PATH: &str = "NOT_USED";

/// Conversion of a record value into a Starlark expression.
pub trait ToStarlark {
    /// Builds the expression for this value.
    fn to_starlark(&self) -> Expr;
}

impl<T: ToStarlark> ToStarlark for [T] {
    fn to_starlark(&self) -> Expr {
        Expr::List(self.iter().map(ToStarlark::to_starlark).collect())
    }
}

impl<T: ToStarlark> ToStarlark for Vec<T> {
    fn to_starlark(&self) -> Expr {
        self.as_slice().to_starlark()
    }
}

fn items<T: ToStarlark>(values: &[T]) -> Vec<Expr> {
    values.iter().map(ToStarlark::to_starlark).collect()
}

fn strings(values: &[String]) -> Vec<Expr> {
    values.iter().map(|value| Expr::str(value.as_str())).collect()
}

fn actions(values: &[String]) -> Vec<Expr> {
    values.iter().map(|value| action_name_expr(value)).collect()
}

impl ToStarlark for MakeVariable {
    fn to_starlark(&self) -> Expr {
        Call::new("make_variable")
            .str_arg("name", &self.name)
            .str_arg("value", &self.value)
            .into()
    }
}

impl ToStarlark for ToolPath {
    fn to_starlark(&self) -> Expr {
        Call::new("tool_path")
            .str_arg("name", &self.name)
            .str_arg("path", &self.path)
            .into()
    }
}

impl ToStarlark for ArtifactNamePattern {
    fn to_starlark(&self) -> Expr {
        Call::new("artifact_name_pattern")
            .str_arg("category_name", &self.category_name)
            .str_arg("prefix", &self.prefix)
            .str_arg("extension", &self.extension)
            .into()
    }
}

impl ToStarlark for Feature {
    fn to_starlark(&self) -> Expr {
        Call::new("feature")
            .str_arg("name", &self.name)
            .flag_arg("enabled", self.enabled)
            .list_arg("flag_sets", items(&self.flag_sets))
            .list_arg("env_sets", items(&self.env_sets))
            .list_arg("requires", items(&self.requires))
            .list_arg("implies", strings(&self.implies))
            .list_arg("provides", strings(&self.provides))
            .into()
    }
}

impl ToStarlark for ActionConfig {
    fn to_starlark(&self) -> Expr {
        Call::new("action_config")
            .arg("action_name", action_name_expr(&self.action_name))
            .flag_arg("enabled", self.enabled)
            .list_arg("flag_sets", items(&self.flag_sets))
            .list_arg("implies", strings(&self.implies))
            .list_arg("tools", items(&self.tools))
            .into()
    }
}

impl ToStarlark for FlagSet {
    fn to_starlark(&self) -> Expr {
        Call::new("flag_set")
            .list_arg("actions", actions(&self.actions))
            .list_arg("with_features", items(&self.with_features))
            .list_arg("flag_groups", items(&self.flag_groups))
            .into()
    }
}

impl ToStarlark for FlagGroup {
    fn to_starlark(&self) -> Expr {
        let call = Call::new("flag_group")
            .list_arg("flags", strings(&self.flags))
            .list_arg("flag_groups", items(&self.flag_groups))
            .opt_str_arg("iterate_over", self.iterate_over.as_deref())
            .opt_str_arg(
                "expand_if_available",
                self.expand_if_all_available.first().map(String::as_str),
            )
            .opt_str_arg(
                "expand_if_not_available",
                self.expand_if_none_available.first().map(String::as_str),
            )
            .opt_str_arg("expand_if_true", self.expand_if_true.as_deref())
            .opt_str_arg("expand_if_false", self.expand_if_false.as_deref());
        match &self.expand_if_equal {
            Some(equal) => call.arg("expand_if_equal", equal.to_starlark()).into(),
            None => call.into(),
        }
    }
}

impl ToStarlark for VariableWithValue {
    fn to_starlark(&self) -> Expr {
        Call::new("variable_with_value")
            .str_arg("name", &self.variable)
            .str_arg("value", &self.value)
            .into()
    }
}

impl ToStarlark for WithFeatureSet {
    fn to_starlark(&self) -> Expr {
        Call::new("with_feature_set")
            .list_arg("features", strings(&self.features))
            .list_arg("not_features", strings(&self.not_features))
            .into()
    }
}

impl ToStarlark for FeatureSet {
    fn to_starlark(&self) -> Expr {
        Call::new("feature_set")
            .list_arg("features", strings(&self.features))
            .into()
    }
}

impl ToStarlark for EnvSet {
    fn to_starlark(&self) -> Expr {
        Call::new("env_set")
            .list_arg("actions", actions(&self.actions))
            .list_arg("env_entries", items(&self.env_entries))
            .list_arg("with_features", items(&self.with_features))
            .into()
    }
}

impl ToStarlark for EnvEntry {
    fn to_starlark(&self) -> Expr {
        Call::new("env_entry")
            .str_arg("key", &self.key)
            .str_arg("value", &self.value)
            .into()
    }
}

impl ToStarlark for Tool {
    fn to_starlark(&self) -> Expr {
        let path = if self.tool_path.is_empty() {
            UNUSED_TOOL_PATH
        } else {
            self.tool_path.as_str()
        };
        Call::new("tool")
            .str_arg("path", path)
            .list_arg("with_features", items(&self.with_features))
            .list_arg("execution_requirements", strings(&self.execution_requirements))
            .into()
    }
}
