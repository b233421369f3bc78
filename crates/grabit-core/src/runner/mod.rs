//! Process runner: spawn the downloader for one target and stream its output
//! through the progress renderer.
//!
//! Output is decoded lossily, so odd bytes in titles never fail a job. The
//! child is always reaped: after end of stream, after a read error (the rest
//! of stdout is drained first so the child can't block on a full pipe),
//! and after a timeout (killed, then awaited). `kill_on_drop` covers the case
//! where the job future itself is dropped.

mod args;
mod error;

pub use args::build_args;
pub use error::JobError;

use std::future::Future;
use std::io;
use std::process::{ExitStatus, Stdio};

use tokio::io::BufReader;
use tokio::process::{Child, ChildStdout};

use crate::console::Console;
use crate::options::DownloadOptions;
use crate::progress::{consume_lines, ProgressRenderer};
use crate::target::DownloadTarget;

/// Runs one job to completion. Implemented by [`ProcessRunner`]; tests swap in fakes.
pub trait JobRunner: Send + Sync + 'static {
    fn run_job(
        &self,
        worker: usize,
        target: &DownloadTarget,
    ) -> impl Future<Output = Result<(), JobError>> + Send;
}

/// Runs the external downloader with shared, read-only options.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    options: std::sync::Arc<DownloadOptions>,
    console: Console,
}

impl ProcessRunner {
    pub fn new(options: std::sync::Arc<DownloadOptions>, console: Console) -> Self {
        Self { options, console }
    }
}

impl JobRunner for ProcessRunner {
    async fn run_job(&self, worker: usize, target: &DownloadTarget) -> Result<(), JobError> {
        run_download(worker, target, &self.options, &self.console).await
    }
}

/// Spawn the downloader for `target`, render its progress, and report how it ended.
pub async fn run_download(
    worker: usize,
    target: &DownloadTarget,
    opts: &DownloadOptions,
    console: &Console,
) -> Result<(), JobError> {
    console.line(format!("Worker {} downloading: {}", worker, target));

    let mut child = opts
        .downloader_command()
        .args(build_args(target, opts))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| JobError::Spawn {
            program: opts.downloader.display().to_string(),
            source,
        })?;
    tracing::debug!(worker, target = %target, pid = ?child.id(), "downloader started");

    let Some(stdout) = child.stdout.take() else {
        reap_after_kill(&mut child, worker).await;
        return Err(JobError::MissingStdout);
    };

    let (stream, status) = match opts.job_timeout {
        Some(limit) => {
            let timed =
                tokio::time::timeout(limit, drive(&mut child, stdout, worker, console)).await;
            match timed {
                Ok(done) => done,
                Err(_) => {
                    tracing::warn!(worker, target = %target, ?limit, "downloader timed out");
                    reap_after_kill(&mut child, worker).await;
                    return Err(JobError::TimedOut(limit));
                }
            }
        }
        None => drive(&mut child, stdout, worker, console).await,
    };

    let status = status.map_err(JobError::Wait)?;
    match stream {
        Ok(last) => tracing::debug!(
            worker,
            target = %target,
            last_percent = ?last,
            %status,
            "downloader exited"
        ),
        Err(e) => {
            console.warn(format!("Worker {} output read error: {}", worker, e));
            return Err(JobError::Stream(e));
        }
    }
    if !status.success() {
        return Err(JobError::Exit(status));
    }
    Ok(())
}

/// Read stdout to the end (draining after an error), then wait for the child.
async fn drive(
    child: &mut Child,
    stdout: ChildStdout,
    worker: usize,
    console: &Console,
) -> (io::Result<Option<u64>>, io::Result<ExitStatus>) {
    let mut reader = BufReader::new(stdout);
    let stream = consume_lines(&mut reader, ProgressRenderer::new(worker, console)).await;
    if stream.is_err() {
        let _ = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await;
    }
    drop(reader);
    (stream, child.wait().await)
}

async fn reap_after_kill(child: &mut Child, worker: usize) {
    if let Err(e) = child.kill().await {
        tracing::warn!(worker, "could not kill downloader: {}", e);
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn sh_options(script: &str, dir: &std::path::Path) -> DownloadOptions {
        DownloadOptions {
            downloader: PathBuf::from("sh"),
            downloader_args: vec!["-c".to_string(), script.to_string(), "fake-dl".to_string()],
            output_dir: dir.to_path_buf(),
            ..DownloadOptions::default()
        }
    }

    #[tokio::test]
    async fn success_with_progress() {
        let dir = tempfile::tempdir().unwrap();
        let opts = sh_options(
            "echo '[download] Destination: a.mp4'; echo '[download]  47.3% of 1MiB'; echo '[download] 100% of 1MiB'",
            dir.path(),
        );
        let console = Console::hidden();
        run_download(1, &DownloadTarget::new("https://youtu.be/a"), &opts, &console)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_zero_exit_is_job_error() {
        let dir = tempfile::tempdir().unwrap();
        let opts = sh_options("echo '[download] 10%'; exit 3", dir.path());
        let console = Console::hidden();
        let err = run_download(1, &DownloadTarget::new("x"), &opts, &console)
            .await
            .unwrap_err();
        match err {
            JobError::Exit(status) => assert_eq!(status.code(), Some(3)),
            other => panic!("expected Exit, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let opts = DownloadOptions {
            downloader: PathBuf::from("/nonexistent/grabit-test-downloader"),
            ..DownloadOptions::default()
        };
        let console = Console::hidden();
        let err = run_download(1, &DownloadTarget::new("x"), &opts, &console)
            .await
            .unwrap_err();
        assert!(matches!(err, JobError::Spawn { .. }));
    }

    #[tokio::test]
    async fn non_utf8_title_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let opts = sh_options(
            "printf '[download] Destination: caf\\351.mp4\\n[download]  50.0%% of 1MiB\\n[download] 100%% of 1MiB\\n'; exit 0",
            dir.path(),
        );
        let console = Console::hidden();
        run_download(1, &DownloadTarget::new("x"), &opts, &console)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_utf8_output_keeps_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let opts = sh_options("printf '\\377\\376\\n'; exit 4", dir.path());
        let console = Console::hidden();
        let err = run_download(1, &DownloadTarget::new("x"), &opts, &console)
            .await
            .unwrap_err();
        assert!(matches!(err, JobError::Exit(status) if status.code() == Some(4)));
    }

    #[tokio::test]
    async fn timeout_kills_child() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = sh_options("echo '[download] 1%'; sleep 30", dir.path());
        opts.job_timeout = Some(Duration::from_millis(300));
        let console = Console::hidden();
        let started = std::time::Instant::now();
        let err = run_download(1, &DownloadTarget::new("x"), &opts, &console)
            .await
            .unwrap_err();
        assert!(matches!(err, JobError::TimedOut(_)));
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}
