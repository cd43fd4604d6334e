//! Run external formatters over the sources in the subdirectories of a
//! workspace.

mod config;
mod discover;
mod error;
mod runner;

pub use self::config::{Config, Step, CONFIG_FILE};
pub use self::discover::discover;
pub use self::error::LintError;
pub use self::runner::{lint_all, lint_file, FileReport, Invoke, Process, Summary};
