use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;
use tokio::task::JoinSet;

use crate::config::Step;
use crate::error::LintError;

/// Something capable of running a formatting step on a file.
pub trait Invoke: Send + Sync + 'static {
    /// Run `step` on `file`, returning whether it exited successfully.
    fn invoke(&self, step: &Step, file: &Path)
        -> impl Future<Output = Result<bool, LintError>> + Send;
}

/// Runs steps as child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Process;

impl Invoke for Process {
    async fn invoke(&self, step: &Step, file: &Path) -> Result<bool, LintError> {
        let mut cmd = Command::new(&step.program);
        cmd.args(step.args_for(file));
        cmd.stdin(Stdio::null());

        let status = cmd
            .status()
            .await
            .map_err(|e| LintError::Spawn(step.program.clone(), e))?;

        Ok(status.success())
    }
}

/// Outcome of formatting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: PathBuf,
    /// Number of steps attempted.
    pub attempts: usize,
    /// Number of steps which failed to spawn or exited unsuccessfully.
    pub failed: usize,
}

/// Summary over all files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub attempts: usize,
    pub failed: usize,
}

/// Format every file concurrently, running the steps for any one file in
/// order.
///
/// Completes once every step on every file has finished. Failing steps are
/// logged and counted but do not stop the remaining work.
pub async fn lint_all<I, F>(invoke: Arc<I>, steps: Arc<[Step]>, files: F) -> Summary
where
    I: Invoke,
    F: IntoIterator<Item = PathBuf>,
{
    let mut tasks = JoinSet::new();

    for file in files {
        let invoke = invoke.clone();
        let steps = steps.clone();
        tasks.spawn(async move { lint_file(&*invoke, &steps, file).await });
    }

    let mut summary = Summary::default();

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(report) => {
                summary.files += 1;
                summary.attempts += report.attempts;
                summary.failed += report.failed;
            }
            Err(error) => {
                log::error!("lint task failed: {error}");
            }
        }
    }

    summary
}

/// Run each step on `file` in order.
pub async fn lint_file<I>(invoke: &I, steps: &[Step], file: PathBuf) -> FileReport
where
    I: Invoke,
{
    let mut failed = 0;

    for step in steps {
        match invoke.invoke(step, &file).await {
            Ok(true) => {}
            Ok(false) => {
                log::warn!("{}: `{}` was not successful", file.display(), step.program);
                failed += 1;
            }
            Err(error) => {
                log::warn!("{}: {error}", file.display());
                failed += 1;
            }
        }
    }

    log::info!("Linted {}", file.display());

    FileReport {
        file,
        attempts: steps.len(),
        failed,
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use super::{lint_all, lint_file, Invoke, Process, Summary};
    use crate::config::{Config, Step};
    use crate::error::LintError;

    /// Records every invocation and fails the given program.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(String, PathBuf)>>,
        fail: Option<&'static str>,
    }

    impl Invoke for Recorder {
        async fn invoke(&self, step: &Step, file: &Path) -> Result<bool, LintError> {
            tokio::task::yield_now().await;
            self.calls
                .lock()
                .unwrap()
                .push((step.program.clone(), file.to_owned()));
            Ok(self.fail != Some(step.program.as_str()))
        }
    }

    fn files(n: usize) -> Vec<PathBuf> {
        (0..n).map(|n| PathBuf::from(format!("/work/d{n}/day.py"))).collect()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_every_file_gets_every_step_in_order() {
        let recorder = Arc::new(Recorder::default());
        let steps: Arc<[Step]> = Config::default().steps.into();

        let summary = lint_all(recorder.clone(), steps, files(16)).await;

        assert_eq!(
            summary,
            Summary {
                files: 16,
                attempts: 32,
                failed: 0
            }
        );

        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls.len(), 32);

        for file in files(16) {
            let programs = calls
                .iter()
                .filter(|(_, f)| *f == file)
                .map(|(p, _)| p.as_str())
                .collect::<Vec<_>>();

            assert_eq!(programs, ["python", "black"]);
        }
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_later_steps() {
        let recorder = Recorder {
            fail: Some("python"),
            ..Recorder::default()
        };

        let steps = Config::default().steps;
        let report = lint_file(&recorder, &steps, PathBuf::from("/work/a.py")).await;

        assert_eq!(report.attempts, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(recorder.calls.lock().unwrap().len(), 2);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_exit_status() {
        let file = Path::new("/dev/null");

        let ok = Process.invoke(&Step::new("true", []), file).await;
        assert!(matches!(ok, Ok(true)));

        let failed = Process.invoke(&Step::new("false", []), file).await;
        assert!(matches!(failed, Ok(false)));

        let missing = Step::new("lint-test-no-such-program", []);
        let error = Process.invoke(&missing, file).await;
        assert!(matches!(error, Err(LintError::Spawn(program, _)) if program == missing.program));
    }

    #[tokio::test]
    async fn test_no_files() {
        let recorder = Arc::new(Recorder::default());
        let summary = lint_all(recorder, Config::default().steps.into(), Vec::new()).await;
        assert_eq!(summary, Summary::default());
    }
}
