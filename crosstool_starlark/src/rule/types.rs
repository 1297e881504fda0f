//! Configuration and result types for rule generation.

use crate::condition::Assignment;
use crate::error::OwnerKind;

/// Options controlling the text around the generated statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Name bound to the generated `rule(...)`.
    pub rule_name: String,
    /// Label of the file defining `feature`, `flag_set` and friends.
    pub config_lib_label: String,
    /// Label of the file defining `ACTION_NAMES`.
    pub action_names_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rule_name: "cc_toolchain_config".to_owned(),
            config_lib_label: "@bazel_tools//tools/cpp:cc_toolchain_config_lib.bzl".to_owned(),
            action_names_label: "@bazel_tools//tools/build_defs/cc:action_names.bzl".to_owned(),
        }
    }
}

/// What a statement of the rule body assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A field passed to `create_cc_toolchain_config_info`.
    Field,
    /// A hoisted feature or action config declaration.
    Declaration(OwnerKind),
}

/// One statement of the generated `_impl` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    /// Whether the statement is a field or a declaration.
    pub role: Role,
    /// The synthesized assignment.
    pub assignment: Assignment<'a>,
}

impl<'a> Statement<'a> {
    /// Wraps a field assignment.
    #[must_use]
    pub const fn field(assignment: Assignment<'a>) -> Self {
        Self {
            role: Role::Field,
            assignment,
        }
    }

    /// Wraps a hoisted declaration of `kind`.
    #[must_use]
    pub const fn declaration(kind: OwnerKind, assignment: Assignment<'a>) -> Self {
        Self {
            role: Role::Declaration(kind),
            assignment,
        }
    }
}
