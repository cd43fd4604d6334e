use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LintError;

/// Name of the configuration file looked up in the lint root.
pub const CONFIG_FILE: &str = "lint.json";

/// Placeholder argument replaced by the path of the file being formatted.
const FILE: &str = "{file}";

/// Formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extension of files to format, without the leading dot.
    pub extension: String,
    /// Commands to run on each file, in order.
    pub steps: Vec<Step>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: String::from("py"),
            steps: vec![
                Step::new("python", ["-m", "isort", FILE, "--profile", "black"]),
                Step::new("black", [FILE]),
            ],
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `lint.json` in `root` is used
    /// if present, falling back to the defaults.
    pub fn load(path: Option<&Path>, root: &Path) -> Result<Self, LintError> {
        let (path, required) = match path {
            Some(path) => (path.to_owned(), true),
            None => (root.join(CONFIG_FILE), false),
        };

        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if !required && e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{}: not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(LintError::ReadConfig(path, e)),
        };

        serde_json::from_slice(&data).map_err(|e| LintError::BadConfig(path, e))
    }
}

/// A single formatter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    /// Program to run.
    pub program: String,
    /// Arguments, where `{file}` is replaced by the file path.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Step {
    pub fn new<const N: usize>(program: &str, args: [&str; N]) -> Self {
        Self {
            program: program.to_owned(),
            args: args.iter().map(|&arg| arg.to_owned()).collect(),
        }
    }

    /// Arguments to pass when formatting `file`.
    ///
    /// The path is appended if no argument mentions it.
    pub fn args_for(&self, file: &Path) -> Vec<PathBuf> {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        let mut found = false;

        for arg in &self.args {
            if arg == FILE {
                args.push(file.to_owned());
                found = true;
            } else {
                args.push(PathBuf::from(arg));
            }
        }

        if !found {
            args.push(file.to_owned());
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{Config, Step, CONFIG_FILE};

    #[test]
    fn test_default_steps() {
        let config = Config::default();
        assert_eq!(config.extension, "py");
        assert_eq!(config.steps.len(), 2);

        let file = Path::new("/work/a_day1/day1.py");
        let args = config.steps[0].args_for(file);
        assert_eq!(
            args,
            ["-m", "isort", "/work/a_day1/day1.py", "--profile", "black"]
                .map(PathBuf::from)
        );
        assert_eq!(config.steps[1].args_for(file), [PathBuf::from(file)]);
    }

    #[test]
    fn test_append_file() {
        let step = Step::new("rustfmt", ["--edition", "2021"]);
        let args = step.args_for(Path::new("src/lib.rs"));
        assert_eq!(args, ["--edition", "2021", "src/lib.rs"].map(PathBuf::from));
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(None, dir.path()).unwrap(), Config::default());

        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"extension": "rs", "steps": [{"program": "rustfmt"}]}"#,
        )
        .unwrap();

        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config.extension, "rs");
        assert_eq!(config.steps, [Step::new("rustfmt", [])]);

        let missing = dir.path().join("missing.json");
        assert!(Config::load(Some(&missing), dir.path()).is_err());

        fs::write(dir.path().join(CONFIG_FILE), r#"{"exts": "rs"}"#).unwrap();
        assert!(Config::load(None, dir.path()).is_err());
    }
}
