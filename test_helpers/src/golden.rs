//! Access to golden output files.

use anyhow::{Context, Result, bail};
use camino::Utf8Path;

use crate::text::{first_difference, normalize_newlines};

/// Reads `name` from `dir`, normalizing line endings.
///
/// # Errors
///
/// Returns an error when the file cannot be read.
pub fn read(dir: &Utf8Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("read golden file {path}"))?;
    Ok(normalize_newlines(&content))
}

/// Compares `actual` with the golden file `name` in `dir`.
///
/// # Errors
///
/// Returns an error naming the first differing line, or when the file cannot
/// be read.
pub fn check(dir: &Utf8Path, name: &str, actual: &str) -> Result<()> {
    let expected = read(dir, name)?;
    if let Some(difference) = first_difference(actual, &expected) {
        bail!("output differs from {name}: {difference}");
    }
    Ok(())
}
