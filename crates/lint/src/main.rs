use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use lint::{Config, Process};

#[derive(Default)]
struct Opts {
    verbose: bool,
    dir: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options.
    fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--dir" => {
                    let dir = it.next().context("missing argument to `--dir`")?;
                    opts.dir = Some(PathBuf::from(dir));
                }
                "--config" => {
                    let config = it.next().context("missing argument to `--config`")?;
                    opts.config = Some(PathBuf::from(config));
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse()?;
    lib::cli::init_logger(opts.verbose)?;

    let root = match opts.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("current directory")?,
    };

    let config = Config::load(opts.config.as_deref(), &root)?;
    let files = lint::discover(&root, &config.extension)?;

    log::debug!(
        "{}: found {} `.{}` file(s)",
        root.display(),
        files.len(),
        config.extension
    );

    let summary = lint::lint_all(Arc::new(Process), config.steps.into(), files).await;

    log::info!(
        "linted {} file(s), {} of {} invocation(s) failed",
        summary.files,
        summary.failed,
        summary.attempts
    );

    Ok(())
}
