//! CLI helpers.

mod error;
mod output;
mod stdout_logger;

use core::fmt;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

use crate::input::IStr;

pub use self::error::error_context;
use self::output::{Output, OutputKind};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Read input from the given path instead of the default one.
    input: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options and install the logger unless JSON output was
    /// requested.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            init_logger(opts.verbose)?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    /// Input path override.
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Install the stdout logger.
pub fn init_logger(verbose: bool) -> Result<()> {
    log::set_max_level(if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    log::set_logger(&STDOUT_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;
    Ok(())
}

/// Run a solver over the given input and report its answers.
pub fn run<T, A, B>(opts: &Opts, path: &str, input: IStr, solve: T) -> Result<()>
where
    T: FnOnce(IStr) -> Result<(A, B)>,
    A: fmt::Display + Serialize,
    B: fmt::Display + Serialize,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    let (one, two) = match crate::timeit!(solve(input)) {
        Ok(answers) => answers,
        Err(error) => {
            let error = error_context(path, input, error);

            if opts.json {
                o.error(format_args!("{error:#}"))?;
            }

            return Err(error);
        }
    };

    o.answers(one, two)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::Path;

    use super::Opts;

    fn args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_parse_opts() {
        let opts = Opts::parse_from(args(&["--json", "--input", "x.txt"])).unwrap();
        assert!(opts.json);
        assert!(!opts.verbose);
        assert_eq!(opts.input(), Some(Path::new("x.txt")));

        let opts = Opts::parse_from(args(&["-V", "--", "--bogus"])).unwrap();
        assert!(opts.verbose);
        assert_eq!(opts.input(), None);
    }

    #[test]
    fn test_parse_opts_errors() {
        assert!(Opts::parse_from(args(&["--input"])).is_err());
        assert!(Opts::parse_from(args(&["--bench"])).is_err());
    }
}
