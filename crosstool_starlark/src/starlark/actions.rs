//! Standard action names exported by `@bazel_tools` as `ACTION_NAMES`.

use super::Expr;
use crate::hoist::sanitize_identifier;

/// Action names with a constant in `action_names.bzl`.
const STANDARD_ACTIONS: &[&str] = &[
    "c-compile",
    "c++-compile",
    "linkstamp-compile",
    "cc-flags-make-variable",
    "c++-module-codegen",
    "c++-header-parsing",
    "c++-module-compile",
    "assemble",
    "preprocess-assemble",
    "lto-indexing",
    "lto-backend",
    "lto-index-for-executable",
    "lto-index-for-dynamic-library",
    "lto-index-for-nodeps-dynamic-library",
    "c++-link-executable",
    "c++-link-dynamic-library",
    "c++-link-nodeps-dynamic-library",
    "c++-link-static-library",
    "strip",
    "objc-compile",
    "objc++-compile",
    "objc-executable",
    "objc++-executable",
    "objc-fully-link",
    "clif-match",
];

/// Returns the `ACTION_NAMES` attribute for a standard action name.
///
/// # Examples
///
/// ```
/// use crosstool_starlark::starlark::standard_action_identifier;
///
/// assert_eq!(
///     standard_action_identifier("c++-link-executable").as_deref(),
///     Some("cpp_link_executable")
/// );
/// assert_eq!(standard_action_identifier("my-action"), None);
/// ```
#[must_use]
pub fn standard_action_identifier(action: &str) -> Option<String> {
    STANDARD_ACTIONS
        .contains(&action)
        .then(|| sanitize_identifier(action))
}

/// Renders an action name, preferring the `ACTION_NAMES` constant.
#[must_use]
pub fn action_name_expr(action: &str) -> Expr {
    standard_action_identifier(action).map_or_else(
        || Expr::str(action),
        |identifier| Expr::ident(format!("ACTION_NAMES.{identifier}")),
    )
}
