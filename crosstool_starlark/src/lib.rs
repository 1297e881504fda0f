//! Conversion of CROSSTOOL toolchain records into a Starlark
//! `cc_toolchain_config` rule.
//!
//! Every field of every record is merged into one assignment. Keys that
//! agree on a value share a branch guarded by the smallest `cpu`/`compiler`
//! predicate that separates them from the rest, and features and action
//! configs are declared once and referenced by identifier.
//!
//! ```
//! use crosstool_starlark::{ToolchainRecord, transform};
//!
//! let records = vec![ToolchainRecord {
//!     toolchain_identifier: "local".to_owned(),
//!     target_cpu: "k8".to_owned(),
//!     compiler: "gcc".to_owned(),
//!     ..ToolchainRecord::default()
//! }];
//! let bzl = transform(&records)?;
//! assert!(bzl.contains("    toolchain_identifier = \"local\"\n"));
//! # Ok::<(), crosstool_starlark::TransformError>(())
//! ```

pub mod condition;
pub mod error;
pub mod hoist;
pub mod model;
pub mod partition;
pub mod rule;
pub mod starlark;
pub mod validate;

pub use error::TransformError;
pub use model::{ToolchainKey, ToolchainRecord};
pub use rule::{GeneratedRule, RenderOptions, generate};

/// Renders `records` as a `.bzl` file with the default [`RenderOptions`].
///
/// # Errors
///
/// Returns a [`TransformError`] when the records fail validation or two
/// feature or action names map to one identifier. No text is produced on
/// error.
pub fn transform(records: &[ToolchainRecord]) -> Result<String, TransformError> {
    transform_with(records, &RenderOptions::default())
}

/// Renders `records` as a `.bzl` file using `options`.
///
/// # Errors
///
/// See [`transform`].
pub fn transform_with(
    records: &[ToolchainRecord],
    options: &RenderOptions,
) -> Result<String, TransformError> {
    let rule = generate(records)?;
    tracing::debug!(
        statements = rule.statements.len(),
        cpus = rule.cpus.len(),
        compilers = rule.compilers.len(),
        "generated toolchain rule"
    );
    Ok(rule.render(options))
}
