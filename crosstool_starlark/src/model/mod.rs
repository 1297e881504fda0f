//! In-memory representation of CROSSTOOL toolchain records.
//!
//! The types mirror the `CToolchain` message of the legacy CROSSTOOL schema.
//! Records are produced upstream (parsed from text proto or JSON) and are
//! treated as immutable input by the rest of the crate. Every type derives
//! `PartialEq` because equivalence classes are formed by deep, order-sensitive
//! structural equality.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key that discriminates toolchains at evaluation time.
///
/// `cpu` is the record's `target_cpu`; together with `compiler` it must be
/// unique across one input collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolchainKey<'a> {
    /// Value matched against `ctx.attr.cpu`.
    pub cpu: &'a str,
    /// Value matched against `ctx.attr.compiler`.
    pub compiler: &'a str,
}

impl<'a> ToolchainKey<'a> {
    /// Creates a key from its two discriminating attributes.
    #[must_use]
    pub const fn new(cpu: &'a str, compiler: &'a str) -> Self {
        Self { cpu, compiler }
    }
}

impl fmt::Display for ToolchainKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.cpu, self.compiler)
    }
}

/// A single platform/compiler configuration bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainRecord {
    /// Unique identifier of the toolchain.
    pub toolchain_identifier: String,
    /// System the toolchain runs on.
    pub host_system_name: String,
    /// System the toolchain produces code for.
    pub target_system_name: String,
    /// Target CPU; the `cpu` half of the record key.
    pub target_cpu: String,
    /// Target C library.
    pub target_libc: String,
    /// Compiler name; the `compiler` half of the record key.
    pub compiler: String,
    /// ABI in use.
    pub abi_version: String,
    /// glibc version in use.
    pub abi_libc_version: String,
    /// Target operating system, when declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_target_os: Option<String>,
    /// Built-in sysroot, when declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin_sysroot: Option<String>,
    /// Include directories the compiler searches implicitly.
    #[serde(default, alias = "cxx_builtin_include_directory")]
    pub cxx_builtin_include_directories: Vec<String>,
    /// Make variables exported to rules.
    #[serde(default, alias = "make_variable")]
    pub make_variables: Vec<MakeVariable>,
    /// Paths to the individual tools.
    #[serde(default, alias = "tool_path")]
    pub tool_paths: Vec<ToolPath>,
    /// Naming patterns for produced artifacts.
    #[serde(default, alias = "artifact_name_pattern")]
    pub artifact_name_patterns: Vec<ArtifactNamePattern>,
    /// Named features.
    #[serde(default, alias = "feature")]
    pub features: Vec<Feature>,
    /// Named action configurations.
    #[serde(default, alias = "action_config")]
    pub action_configs: Vec<ActionConfig>,
}

impl ToolchainRecord {
    /// Returns the `(cpu, compiler)` key of this record.
    #[must_use]
    pub fn key(&self) -> ToolchainKey<'_> {
        ToolchainKey::new(&self.target_cpu, &self.compiler)
    }
}

/// A `make_variable { name, value }` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeVariable {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub value: String,
}

/// A `tool_path { name, path }` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPath {
    /// Tool name, for example `gcc`.
    pub name: String,
    /// Path to the tool.
    pub path: String,
}

/// An `artifact_name_pattern { category_name, prefix, extension }` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactNamePattern {
    /// Artifact category, for example `executable`.
    pub category_name: String,
    /// File name prefix.
    pub prefix: String,
    /// File name extension.
    pub extension: String,
}

/// A named toolchain feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature name; the hoisting key.
    pub name: String,
    /// Whether the feature is enabled by default.
    #[serde(default)]
    pub enabled: bool,
    /// Flag sets applied when the feature is enabled.
    #[serde(default, alias = "flag_set")]
    pub flag_sets: Vec<FlagSet>,
    /// Environment sets applied when the feature is enabled.
    #[serde(default, alias = "env_set")]
    pub env_sets: Vec<EnvSet>,
    /// Alternative feature sets of which one must be enabled.
    #[serde(default)]
    pub requires: Vec<FeatureSet>,
    /// Features or action configs enabled together with this one.
    #[serde(default)]
    pub implies: Vec<String>,
    /// Mutually exclusive capability names.
    #[serde(default)]
    pub provides: Vec<String>,
}

/// A named action configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Name used to enable the config like a feature.
    pub config_name: String,
    /// Action the config applies to; the hoisting key.
    pub action_name: String,
    /// Whether the config is enabled by default.
    #[serde(default)]
    pub enabled: bool,
    /// Tools that may run the action.
    #[serde(default, alias = "tool")]
    pub tools: Vec<Tool>,
    /// Flag sets applied to the action.
    #[serde(default, alias = "flag_set")]
    pub flag_sets: Vec<FlagSet>,
    /// Features or action configs enabled together with this one.
    #[serde(default)]
    pub implies: Vec<String>,
}

/// A set of flag groups applied to some actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSet {
    /// Action names the flags apply to.
    #[serde(default, alias = "action")]
    pub actions: Vec<String>,
    /// Feature constraints guarding the set.
    #[serde(default, alias = "with_feature")]
    pub with_features: Vec<WithFeatureSet>,
    /// Groups of flags to expand.
    #[serde(default, alias = "flag_group")]
    pub flag_groups: Vec<FlagGroup>,
}

/// Flags plus the rules deciding whether and how they expand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagGroup {
    /// Literal flags, possibly containing `%{variable}` references.
    #[serde(default, alias = "flag")]
    pub flags: Vec<String>,
    /// Nested groups.
    #[serde(default, alias = "flag_group")]
    pub flag_groups: Vec<FlagGroup>,
    /// Sequence variable to iterate over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterate_over: Option<String>,
    /// Expand only when these variables are available. At most one entry.
    #[serde(default)]
    pub expand_if_all_available: Vec<String>,
    /// Expand only when none of these variables are available. At most one
    /// entry.
    #[serde(default)]
    pub expand_if_none_available: Vec<String>,
    /// Expand only when the variable is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_if_true: Option<String>,
    /// Expand only when the variable is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_if_false: Option<String>,
    /// Expand only when the variable holds the given value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_if_equal: Option<VariableWithValue>,
}

/// A variable name paired with the value it is compared against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableWithValue {
    /// Build variable name.
    pub variable: String,
    /// Expected value.
    pub value: String,
}

/// Feature constraint: all of `features` enabled and none of `not_features`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithFeatureSet {
    /// Features that must be enabled.
    #[serde(default, alias = "feature")]
    pub features: Vec<String>,
    /// Features that must be disabled.
    #[serde(default, alias = "not_feature")]
    pub not_features: Vec<String>,
}

/// A set of feature names that must all be enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Required feature names.
    #[serde(default, alias = "feature")]
    pub features: Vec<String>,
}

/// Environment variables set for some actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvSet {
    /// Action names the entries apply to.
    #[serde(default, alias = "action")]
    pub actions: Vec<String>,
    /// Variables to set.
    #[serde(default, alias = "env_entry")]
    pub env_entries: Vec<EnvEntry>,
    /// Feature constraints guarding the set.
    #[serde(default, alias = "with_feature")]
    pub with_features: Vec<WithFeatureSet>,
}

/// A single environment variable assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvEntry {
    /// Variable name.
    pub key: String,
    /// Variable value.
    pub value: String,
}

/// A tool an action config may invoke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Path to the tool; empty when the slot exists only structurally.
    #[serde(default)]
    pub tool_path: String,
    /// Feature constraints selecting this tool.
    #[serde(default, alias = "with_feature")]
    pub with_features: Vec<WithFeatureSet>,
    /// Execution requirements for actions run by the tool.
    #[serde(default, alias = "execution_requirement")]
    pub execution_requirements: Vec<String>,
}
