//! Shared helpers for `crosstool-to-starlark` integration tests.

use camino::{Utf8Path, Utf8PathBuf};
use crosstool_starlark::ToolchainRecord;
use std::error::Error;
use std::process::{Command, Output};

/// Resolves the compiled `crosstool-to-starlark` binary path from test
/// environment variables.
///
/// # Errors
///
/// Returns an error when none of the supported cargo/nextest binary
/// environment variables are present.
pub(crate) fn crosstool_to_starlark_exe() -> Result<Utf8PathBuf, Box<dyn Error>> {
    let env_vars = [
        "CARGO_BIN_EXE_crosstool-to-starlark",
        "CARGO_BIN_EXE_crosstool_to_starlark",
        "NEXTEST_BIN_EXE_crosstool-to-starlark",
        "NEXTEST_BIN_EXE_crosstool_to_starlark",
    ];
    for var in env_vars {
        if let Ok(path) = std::env::var(var) {
            return Ok(Utf8PathBuf::from(path));
        }
    }
    Err("crosstool-to-starlark binary path not found in environment".into())
}

/// Temporary workspace holding an input document.
pub(crate) struct Workspace {
    _temp: tempfile::TempDir,
    pub(crate) root: Utf8PathBuf,
}

impl Workspace {
    /// Creates an empty temporary workspace.
    pub(crate) fn new() -> Result<Self, Box<dyn Error>> {
        let temp = tempfile::tempdir()?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|path| format!("temp path is not UTF-8: {}", path.display()))?;
        Ok(Self { _temp: temp, root })
    }

    /// Writes `records` as a toolchain document and returns its path.
    pub(crate) fn write_input(
        &self,
        records: &[ToolchainRecord],
    ) -> Result<Utf8PathBuf, Box<dyn Error>> {
        let document = serde_json::json!({ "toolchain": records });
        self.write_raw("toolchains.json", &serde_json::to_string_pretty(&document)?)
    }

    /// Writes `content` to `name` inside the workspace.
    pub(crate) fn write_raw(&self, name: &str, content: &str) -> Result<Utf8PathBuf, Box<dyn Error>> {
        let path = self.root.join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

/// Runs the binary with `args` and logging left at its default level.
pub(crate) fn run(args: &[&str], cwd: &Utf8Path) -> Result<Output, Box<dyn Error>> {
    let exe = crosstool_to_starlark_exe()?;
    Ok(Command::new(exe.as_str())
        .current_dir(cwd.as_str())
        .env_remove("RUST_LOG")
        .args(args)
        .output()?)
}
