use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("{0}: failed to read directory")]
    ReadDir(PathBuf, #[source] io::Error),
    #[error("{0}: failed to resolve path")]
    Canonicalize(PathBuf, #[source] io::Error),
    #[error("{0}: failed to read config")]
    ReadConfig(PathBuf, #[source] io::Error),
    #[error("{0}: bad config")]
    BadConfig(PathBuf, #[source] serde_json::Error),
    #[error("failed to spawn `{0}`")]
    Spawn(String, #[source] io::Error),
}
