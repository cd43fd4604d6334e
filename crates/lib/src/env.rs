use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::cli::Opts;
use crate::input::IStr;

/// Input processing.
///
/// Reads the input for a puzzle, preferring the `--input` override over the
/// default path. The data is leaked since it lives for the remainder of the
/// process anyway, which lets every [IStr] borrow it as `'static`.
pub fn input(
    opts: &Opts,
    path: &'static str,
    read_path: &'static str,
) -> Result<(IStr, Box<str>)> {
    let (path, read_path): (Box<str>, &Path) = match opts.input() {
        Some(input) => (Box::from(input.display().to_string()), input),
        None => (Box::from(path), Path::new(read_path)),
    };

    let data = read(read_path).with_context(|| anyhow!("{path}"))?;
    log::debug!("{path}: read {} bytes", data.len());
    Ok((IStr::new(data, 0), path))
}

/// Read the given file into static storage.
pub fn read(path: &Path) -> Result<&'static [u8]> {
    let data = fs::read(path)?;
    Ok(Box::leak(data.into_boxed_slice()))
}
