//! Golden tests for complete rule files.

use anyhow::Result;
use camino::Utf8PathBuf;
use crosstool_starlark::{ToolchainRecord, transform};
use rstest::rstest;
use test_helpers::{action_config, feature, golden, toolchain};

fn golden_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
}

fn single_toolchain() -> Vec<ToolchainRecord> {
    vec![
        toolchain("local", "k8", "gcc")
            .systems("local", "local", "local")
            .build(),
    ]
}

fn linux_and_darwin() -> Vec<ToolchainRecord> {
    let stack_frame = ("STACK_FRAME_UNLIMITED", "-Wframe-larger-than=100000000");
    vec![
        toolchain("local_linux", "k8", "gcc")
            .systems("local", "local", "local")
            .include_dirs(["/usr/include"])
            .make_variable(stack_frame.0, stack_frame.1)
            .tool_path("gcc", "/usr/bin/gcc")
            .feature(feature("opt", false))
            .feature(feature("supports_pic", true))
            .build(),
        toolchain("local_darwin", "darwin", "clang")
            .systems("local", "local", "macosx")
            .sysroot("/sdk")
            .include_dirs(["/usr/include", "/Library/Include"])
            .make_variable(stack_frame.0, stack_frame.1)
            .tool_path("gcc", "/usr/bin/clang")
            .feature(feature("opt", false))
            .action_config(action_config("c++-link-executable", true))
            .build(),
    ]
}

#[rstest]
#[case::single_toolchain(single_toolchain(), "single_toolchain.bzl")]
#[case::linux_and_darwin(linux_and_darwin(), "linux_and_darwin.bzl")]
fn rendered_rule_matches_golden(
    #[case] records: Vec<ToolchainRecord>,
    #[case] file: &str,
) -> Result<()> {
    let rendered = transform(&records)?;
    golden::check(&golden_dir(), file, &rendered)
}
