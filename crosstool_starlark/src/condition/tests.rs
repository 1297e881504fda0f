//! Tests for predicate minimization and branch rendering.

use super::*;
use crate::partition::{map_values, partition};
use rstest::{fixture, rstest};

const AA: ToolchainKey<'static> = ToolchainKey::new("cpuA", "compilerA");
const AB: ToolchainKey<'static> = ToolchainKey::new("cpuA", "compilerB");
const BA: ToolchainKey<'static> = ToolchainKey::new("cpuB", "compilerA");
const CA: ToolchainKey<'static> = ToolchainKey::new("cpuC", "compilerA");
const CB: ToolchainKey<'static> = ToolchainKey::new("cpuC", "compilerB");
const DA: ToolchainKey<'static> = ToolchainKey::new("cpuD", "compilerA");

#[fixture]
fn five_toolchains() -> Universe<'static> {
    Universe::new([AA, BA, CA, CB, DA])
}

#[rstest]
fn cpu_alone_discriminates_when_class_owns_every_compiler(five_toolchains: Universe<'static>) {
    let predicate = Predicate::for_class(&[AA, BA], &five_toolchains);
    assert_eq!(predicate.terms, vec![Term::Cpu("cpuA"), Term::Cpu("cpuB")]);
}

#[rstest]
fn shared_cpu_needs_compiler_qualifier(five_toolchains: Universe<'static>) {
    let predicate = Predicate::for_class(&[CA, DA], &five_toolchains);
    assert_eq!(predicate.terms, vec![Term::CpuCompiler(CA), Term::Cpu("cpuD")]);
}

#[rstest]
fn term_order_ignores_member_order(five_toolchains: Universe<'static>) {
    let forward = Predicate::for_class(&[CA, DA], &five_toolchains);
    let reversed = Predicate::for_class(&[DA, CA], &five_toolchains);
    assert_eq!(forward, reversed);
}

#[test]
fn terms_render_as_starlark_comparisons() {
    assert_eq!(Term::Cpu("k8").render(), "ctx.attr.cpu == \"k8\"");
    assert_eq!(
        Term::CpuCompiler(ToolchainKey::new("k8", "gcc")).render(),
        "ctx.attr.cpu == \"k8\" and ctx.attr.compiler == \"gcc\""
    );
}

#[test]
fn single_class_is_unconditional() {
    let universe = Universe::new([AA, AB]);
    let classes = map_values(partition([(AA, "host"), (AB, "host")]), Expr::str);
    let assignment = synthesize("host_system_name", classes, &universe, Coverage::Total);

    assert!(assignment.is_unconditional());
    assert!(assignment.branches().is_empty());
    assert_eq!(assignment.render(4), "    host_system_name = \"host\"\n");
}

#[test]
fn same_cpu_different_compilers_branch_on_both() {
    let universe = Universe::new([AA, AB]);
    let classes = map_values(partition([(AA, "1"), (AB, "2")]), Expr::str);
    let assignment = synthesize("toolchain_identifier", classes, &universe, Coverage::Total);

    let expected = r#"    if (ctx.attr.cpu == "cpuA" and ctx.attr.compiler == "compilerA"):
        toolchain_identifier = "1"
    elif (ctx.attr.cpu == "cpuA" and ctx.attr.compiler == "compilerB"):
        toolchain_identifier = "2"
    else:
        fail("Unreachable")
"#;
    assert!(assignment.has_unreachable_fallback());
    assert_eq!(assignment.render(4), expected);
}

#[rstest]
fn multi_term_predicates_continue_on_new_lines(five_toolchains: Universe<'static>) {
    let classes = map_values(
        partition([
            (AA, vec![]),
            (BA, vec![]),
            (CA, vec!["dirC"]),
            (CB, vec!["dirC", "dirB"]),
            (DA, vec!["dirC"]),
        ]),
        |value: Vec<&str>| Expr::str_list(&value),
    );
    let assignment = synthesize(
        "cxx_builtin_include_directories",
        classes,
        &five_toolchains,
        Coverage::Total,
    );

    let expected = r#"    if (ctx.attr.cpu == "cpuA"
        or ctx.attr.cpu == "cpuB"):
        cxx_builtin_include_directories = []
    elif (ctx.attr.cpu == "cpuC" and ctx.attr.compiler == "compilerA"
        or ctx.attr.cpu == "cpuD"):
        cxx_builtin_include_directories = ["dirC"]
    elif (ctx.attr.cpu == "cpuC" and ctx.attr.compiler == "compilerB"):
        cxx_builtin_include_directories = ["dirC", "dirB"]
    else:
        fail("Unreachable")
"#;
    assert_eq!(assignment.render(4), expected);
}

#[test]
fn partial_coverage_omits_the_fallback() {
    let universe = Universe::new([AA, AB]);
    let classes = map_values(partition([(AA, "on"), (AB, "off")]), Expr::str);
    let assignment = synthesize("a_feature", classes, &universe, Coverage::Partial);

    assert!(!assignment.has_unreachable_fallback());
    assert_eq!(assignment.branches().len(), 2);
    assert!(!assignment.render(4).contains("else"));
}
