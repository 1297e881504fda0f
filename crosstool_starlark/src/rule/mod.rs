//! Assembly of the complete `cc_toolchain_config` rule.
//!
//! [`generate`] merges every schema field in a fixed order and returns the
//! statements as a [`GeneratedRule`]. Rendering adds the `load` header, the
//! provider return value and the rule declaration.

mod types;

pub use types::{RenderOptions, Role, Statement};

use std::collections::BTreeSet;

use tracing::debug;

use crate::condition::{Assignment, Coverage, Universe, synthesize};
use crate::error::{OwnerKind, TransformError};
use crate::hoist::hoist;
use crate::model::ToolchainRecord;
use crate::partition::{map_values, partition};
use crate::starlark::{Call, Expr, INDENT, ToStarlark, quote};
use crate::validate::validate;

/// Accessor for a mandatory string field.
type StringField = fn(&ToolchainRecord) -> &str;

/// Accessor for an optional string field.
type OptionalField = fn(&ToolchainRecord) -> Option<&str>;

const STRING_FIELDS: &[(&str, StringField)] = &[
    ("toolchain_identifier", |record| record.toolchain_identifier.as_str()),
    ("host_system_name", |record| record.host_system_name.as_str()),
    ("target_system_name", |record| record.target_system_name.as_str()),
    ("target_cpu", |record| record.target_cpu.as_str()),
    ("target_libc", |record| record.target_libc.as_str()),
    ("compiler", |record| record.compiler.as_str()),
    ("abi_version", |record| record.abi_version.as_str()),
    ("abi_libc_version", |record| record.abi_libc_version.as_str()),
];

const OPTIONAL_FIELDS: &[(&str, OptionalField)] = &[
    ("cc_target_os", |record| record.cc_target_os.as_deref()),
    ("builtin_sysroot", |record| record.builtin_sysroot.as_deref()),
];

/// Symbols imported from the toolchain config library.
const CONFIG_LIB_SYMBOLS: &[&str] = &[
    "action_config",
    "artifact_name_pattern",
    "env_entry",
    "env_set",
    "feature",
    "feature_set",
    "flag_group",
    "flag_set",
    "make_variable",
    "tool",
    "tool_path",
    "variable_with_value",
    "with_feature_set",
];

/// Fields passed to `create_cc_toolchain_config_info`, in call order.
const PROVIDER_FIELDS: &[&str] = &[
    "features",
    "action_configs",
    "artifact_name_patterns",
    "cxx_builtin_include_directories",
    "toolchain_identifier",
    "host_system_name",
    "target_system_name",
    "target_cpu",
    "target_libc",
    "compiler",
    "abi_version",
    "abi_libc_version",
    "tool_paths",
    "make_variables",
    "builtin_sysroot",
    "cc_target_os",
];

/// Structured result of the transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRule<'a> {
    /// Statements of the `_impl` body in emission order.
    pub statements: Vec<Statement<'a>>,
    /// Sorted distinct cpu values.
    pub cpus: Vec<&'a str>,
    /// Sorted distinct compiler values.
    pub compilers: Vec<&'a str>,
}

impl<'a> GeneratedRule<'a> {
    /// Finds the statement assigning `target`.
    #[must_use]
    pub fn assignment(&self, target: &str) -> Option<&Assignment<'a>> {
        self.statements
            .iter()
            .map(|statement| &statement.assignment)
            .find(|assignment| assignment.target == target)
    }

    /// Hoisted declarations of `kind`, in emission order.
    pub fn declarations(&self, kind: OwnerKind) -> impl Iterator<Item = &Assignment<'a>> {
        self.statements
            .iter()
            .filter(move |statement| statement.role == Role::Declaration(kind))
            .map(|statement| &statement.assignment)
    }

    /// Renders the `_impl` body statements, each followed by a blank line.
    #[must_use]
    pub fn render_body(&self) -> String {
        let mut out = String::new();
        for statement in &self.statements {
            out.push_str(&statement.assignment.render(INDENT));
            out.push('\n');
        }
        out
    }

    /// Renders the complete `.bzl` file.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::with_capacity(8192);
        out.push_str(&load_header(options));
        out.push_str("\ndef _impl(ctx):\n");
        out.push_str(&self.render_body());
        out.push_str(&provider_return());
        out.push('\n');
        out.push_str(&self.rule_declaration(options));
        out
    }

    fn rule_declaration(&self, options: &RenderOptions) -> String {
        let cpu = Call::new("attr.string")
            .arg("mandatory", Expr::Bool(true))
            .arg("values", Expr::str_list(&self.cpus));
        let compiler = Call::new("attr.string").arg("values", Expr::str_list(&self.compilers));
        let attr_indent = 2 * INDENT;
        format!(
            "{name} = rule(\n    implementation = _impl,\n    attrs = {{\n        {cpu_key}: {cpu},\n        {compiler_key}: {compiler},\n    }},\n    provides = [CcToolchainConfigInfo],\n    executable = True,\n)\n",
            name = options.rule_name,
            cpu_key = quote("cpu"),
            cpu = Expr::from(cpu).render(attr_indent),
            compiler_key = quote("compiler"),
            compiler = Expr::from(compiler).render(attr_indent),
        )
    }
}

fn load_header(options: &RenderOptions) -> String {
    let mut out = format!("load({},\n", quote(&options.config_lib_label));
    for symbol in CONFIG_LIB_SYMBOLS {
        out.push_str(&format!("    {},\n", quote(symbol)));
    }
    out.push_str(")\n");
    out.push_str(&format!(
        "load({}, {})\n",
        quote(&options.action_names_label),
        quote("ACTION_NAMES")
    ));
    out
}

fn provider_return() -> String {
    let info = PROVIDER_FIELDS.iter().fold(
        Call::new("cc_common.create_cc_toolchain_config_info").arg("ctx", Expr::ident("ctx")),
        |call, field| call.arg(*field, Expr::ident(*field)),
    );
    let providers = Expr::List(vec![
        info.into(),
        Call::new("DefaultInfo").arg("executable", Expr::ident("out")).into(),
    ]);
    format!(
        "    out = ctx.actions.declare_file(ctx.label.name)\n    ctx.actions.write(out, {})\n    return {}\n",
        quote("Fake executable"),
        providers.render(INDENT)
    )
}

/// Merges one field over `universe` with total coverage.
fn merge_field<'a, V, E, C>(
    target: &str,
    records: &'a [ToolchainRecord],
    universe: &Universe<'a>,
    extract: E,
    to_expr: C,
) -> Assignment<'a>
where
    V: PartialEq,
    E: Fn(&'a ToolchainRecord) -> V,
    C: FnMut(V) -> Expr,
{
    let classes = partition(records.iter().map(|record| (record.key(), extract(record))));
    let assignment = synthesize(target, map_values(classes, to_expr), universe, Coverage::Total);
    debug!(
        field = target,
        branches = assignment.branches().len(),
        "merged field"
    );
    assignment
}

/// Merges every field of `records` into a [`GeneratedRule`].
///
/// # Errors
///
/// Returns the first validation failure; see [`validate`].
pub fn generate(records: &[ToolchainRecord]) -> Result<GeneratedRule<'_>, TransformError> {
    validate(records)?;
    let universe = Universe::new(records.iter().map(ToolchainRecord::key));
    let mut statements = Vec::new();

    for (target, field) in STRING_FIELDS {
        statements.push(Statement::field(merge_field(
            target,
            records,
            &universe,
            *field,
            Expr::str,
        )));
    }
    for (target, field) in OPTIONAL_FIELDS {
        statements.push(Statement::field(merge_field(
            target,
            records,
            &universe,
            *field,
            Expr::optional_str,
        )));
    }

    let actions = hoist("action_configs", records, &universe, |record| {
        record.action_configs.as_slice()
    })?;
    statements.extend(
        actions
            .declarations
            .into_iter()
            .map(|declaration| Statement::declaration(OwnerKind::ActionConfig, declaration)),
    );
    statements.push(Statement::field(actions.references));

    let features = hoist("features", records, &universe, |record| {
        record.features.as_slice()
    })?;
    statements.extend(
        features
            .declarations
            .into_iter()
            .map(|declaration| Statement::declaration(OwnerKind::Feature, declaration)),
    );
    statements.push(Statement::field(features.references));

    statements.push(Statement::field(merge_field(
        "cxx_builtin_include_directories",
        records,
        &universe,
        |record| record.cxx_builtin_include_directories.as_slice(),
        Expr::str_list,
    )));
    statements.push(Statement::field(merge_field(
        "artifact_name_patterns",
        records,
        &universe,
        |record| record.artifact_name_patterns.as_slice(),
        ToStarlark::to_starlark,
    )));
    statements.push(Statement::field(merge_field(
        "make_variables",
        records,
        &universe,
        |record| record.make_variables.as_slice(),
        ToStarlark::to_starlark,
    )));
    statements.push(Statement::field(merge_field(
        "tool_paths",
        records,
        &universe,
        |record| record.tool_paths.as_slice(),
        ToStarlark::to_starlark,
    )));

    Ok(GeneratedRule {
        statements,
        cpus: distinct(records.iter().map(|record| record.target_cpu.as_str())),
        compilers: distinct(records.iter().map(|record| record.compiler.as_str())),
    })
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}
