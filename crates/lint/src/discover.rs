use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LintError;

/// Find files with the given extension in the immediate subdirectories of
/// `root`.
///
/// Neither `root` itself nor deeper levels are searched. Paths are resolved
/// to absolute paths so that the same file reached through different routes
/// is only returned once.
pub fn discover(root: &Path, extension: &str) -> Result<BTreeSet<PathBuf>, LintError> {
    let mut files = BTreeSet::new();

    for dir in read_dir(root)? {
        if !dir.is_dir() {
            continue;
        }

        for file in read_dir(&dir)? {
            if !file.is_file() || file.extension().map_or(true, |ext| ext != extension) {
                continue;
            }

            let file = file
                .canonicalize()
                .map_err(|e| LintError::Canonicalize(file.clone(), e))?;

            files.insert(file);
        }
    }

    Ok(files)
}

fn read_dir(path: &Path) -> Result<Vec<PathBuf>, LintError> {
    let error = |e| LintError::ReadDir(path.to_owned(), e);
    let mut paths = Vec::new();

    for entry in fs::read_dir(path).map_err(error)? {
        paths.push(entry.map_err(error)?.path());
    }

    Ok(paths)
}
