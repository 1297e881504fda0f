//! Error types for `crosstool-to-starlark`.

use camino::Utf8PathBuf;
use crosstool_starlark::TransformError;
use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The records could not be converted.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The input document is not valid toolchain JSON.
    #[error("failed to parse toolchain JSON: {0}")]
    InputJson(#[from] serde_json::Error),

    /// A path that must name a file has no file name component.
    #[error("path {0} does not name a file")]
    NotAFile(Utf8PathBuf),

    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File or directory being accessed.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the rule to standard output failed.
    #[error("failed to write to standard output: {0}")]
    Stdout(#[source] std::io::Error),
}
