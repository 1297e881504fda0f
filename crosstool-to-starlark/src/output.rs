//! Output writers for `crosstool-to-starlark`.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::OpenOptions;
use std::io::Write;

use crate::error::ConvertError;
use crate::fs_helpers::{ensure_dir, split_file_path};

/// Writes `content` to `path`, creating missing parent directories and
/// replacing any existing file.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] when a directory or the file cannot be
/// created or written.
pub fn write_rule(path: &Utf8Path, content: &str) -> Result<Utf8PathBuf, ConvertError> {
    let (dir_path, file_name) = split_file_path(path)?;
    let dir = ensure_dir(dir_path)?;
    let io_error = |io_err| ConvertError::Io {
        path: path.to_path_buf(),
        source: io_err,
    };
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(io_error)?;
    file.write_all(content.as_bytes()).map_err(io_error)?;
    Ok(path.to_path_buf())
}

/// Writes `content` to standard output.
///
/// # Errors
///
/// Returns [`ConvertError::Stdout`] when the write fails.
pub fn write_stdout(content: &str) -> Result<(), ConvertError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(ConvertError::Stdout)
}
