//! Loading of toolchain records from JSON.

use camino::Utf8Path;
use crosstool_starlark::ToolchainRecord;
use serde::Deserialize;

use crate::error::ConvertError;
use crate::fs_helpers::{open_dir, split_file_path};

/// Top-level input document; mirrors a CROSSTOOL release's `toolchain`
/// repeated field.
#[derive(Debug, Deserialize)]
struct CrosstoolDocument {
    #[serde(alias = "toolchains")]
    toolchain: Vec<ToolchainRecord>,
}

/// Parses the records out of a JSON document.
///
/// # Errors
///
/// Returns [`ConvertError::InputJson`] when the text is not a valid document.
pub fn parse_toolchains(text: &str) -> Result<Vec<ToolchainRecord>, ConvertError> {
    let document: CrosstoolDocument = serde_json::from_str(text)?;
    Ok(document.toolchain)
}

/// Reads and parses the records stored at `path`.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] when the file cannot be read, or the errors
/// of [`parse_toolchains`].
pub fn read_toolchains(path: &Utf8Path) -> Result<Vec<ToolchainRecord>, ConvertError> {
    let (dir_path, file_name) = split_file_path(path)?;
    let dir = open_dir(dir_path)?;
    let text = dir
        .read_to_string(file_name)
        .map_err(|io_err| ConvertError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;
    parse_toolchains(&text)
}
