//! Filesystem helpers shared by the input and output modules.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::ConvertError;

/// Splits `path` into its containing directory and file name.
///
/// A bare file name resolves against the current directory.
pub fn split_file_path(path: &Utf8Path) -> Result<(&Utf8Path, &str), ConvertError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ConvertError::NotAFile(path.to_path_buf()))?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Ok((parent, file_name))
}

/// Opens an existing directory.
pub fn open_dir(path: &Utf8Path) -> Result<Dir, ConvertError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| ConvertError::Io {
        path: path.to_path_buf(),
        source: io_err,
    })
}

/// Opens a directory, creating it and its parents when missing.
pub fn ensure_dir(path: &Utf8Path) -> Result<Dir, ConvertError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| {
                ConvertError::Io {
                    path: path.to_path_buf(),
                    source: io_err,
                }
            })?;
            open_dir(path)
        }
        Err(open_err) => Err(ConvertError::Io {
            path: path.to_path_buf(),
            source: open_err,
        }),
    }
}
