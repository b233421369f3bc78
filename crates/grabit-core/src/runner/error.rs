//! Per-job failure type.

use std::io;
use std::process::ExitStatus;
use std::time::Duration;

/// Why a single job failed. Never fatal to the pool.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// The downloader could not be started (not installed, not executable, ...).
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The child was spawned without a stdout handle.
    #[error("downloader stdout was not captured")]
    MissingStdout,
    /// Reading the child's output failed before end of stream.
    #[error("reading downloader output: {0}")]
    Stream(#[source] io::Error),
    /// Reaping the child failed.
    #[error("waiting for downloader: {0}")]
    Wait(#[source] io::Error),
    /// The downloader exited unsuccessfully.
    #[error("downloader exited with {0}")]
    Exit(ExitStatus),
    /// The per-job timeout elapsed; the child was killed.
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
}
