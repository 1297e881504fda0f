//! Library interface for the `crosstool-to-starlark` command.
//!
//! Reads toolchain records from a JSON document, converts them with
//! [`crosstool_starlark::transform_with`] and writes the resulting rule to a
//! file or standard output.

pub mod cli;
pub mod error;
mod fs_helpers;
pub mod input;
pub mod output;

use tracing::info;

use crate::cli::Args;
use crate::error::ConvertError;

/// Runs one conversion as described by `args`.
///
/// Nothing is written when reading or converting fails.
///
/// # Errors
///
/// Returns a [`ConvertError`] when the input cannot be read or parsed, the
/// records fail to convert, or the output cannot be written.
pub fn run(args: &Args) -> Result<(), ConvertError> {
    let records = input::read_toolchains(&args.input)?;
    info!(input = %args.input, toolchains = records.len(), "loaded toolchain records");

    let rendered = crosstool_starlark::transform_with(&records, &args.render_options())?;
    match &args.output {
        Some(path) => {
            let written = output::write_rule(path, &rendered)?;
            info!(output = %written, bytes = rendered.len(), "wrote toolchain rule");
        }
        None => output::write_stdout(&rendered)?,
    }
    Ok(())
}
