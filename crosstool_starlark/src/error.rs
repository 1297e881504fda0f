//! Error types for the CROSSTOOL to Starlark transform.

use std::fmt;

use thiserror::Error;

/// Kind of named structure that owns a flag group or a hoisted identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerKind {
    /// A `feature`, keyed by its `name`.
    Feature,
    /// An `action_config`, keyed by its `action_name`.
    ActionConfig,
}

impl OwnerKind {
    /// Returns the schema name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::ActionConfig => "action_config",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flag-group directive that may appear at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `expand_if_all_available`.
    AllAvailable,
    /// `expand_if_none_available`.
    NoneAvailable,
}

impl Directive {
    /// Returns the schema field name of the directive.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::AllAvailable => "expand_if_all_available",
            Self::NoneAvailable => "expand_if_none_available",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Errors surfaced by the transform. No partial output accompanies them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A flag group repeats a directive that may appear at most once.
    #[error("Error in {kind} '{owner}': Flag group must not have more than one '{directive}' field")]
    FlagGroup {
        /// Kind of structure owning the flag group.
        kind: OwnerKind,
        /// Feature name or action name of the owner.
        owner: String,
        /// Directive that was repeated.
        directive: Directive,
    },

    /// Two records share one `(cpu, compiler)` key.
    #[error("toolchain key cpu '{cpu}', compiler '{compiler}' appears more than once")]
    DuplicateToolchain {
        /// Repeated cpu value.
        cpu: String,
        /// Repeated compiler value.
        compiler: String,
    },

    /// One record declares the same feature or action name twice.
    #[error("toolchain '{toolchain}' declares {kind} '{name}' more than once")]
    DuplicateDefinition {
        /// Kind of the repeated structure.
        kind: OwnerKind,
        /// Repeated feature name or action name.
        name: String,
        /// Identifier of the declaring toolchain.
        toolchain: String,
    },

    /// Two distinct names sanitize to the same generated identifier.
    #[error("{kind} names '{first}' and '{second}' both map to identifier '{identifier}'")]
    IdentifierCollision {
        /// Kind of the colliding structures.
        kind: OwnerKind,
        /// Identifier both names map to.
        identifier: String,
        /// Name that claimed the identifier first.
        first: String,
        /// Name that collided with it.
        second: String,
    },

    /// The input holds no records.
    #[error("no toolchains to convert")]
    NoToolchains,
}
