//! Fixed-size worker pool over the job queue.
//!
//! Spawns exactly `concurrency` workers; each pulls targets until the queue is
//! closed and drained. A failed job is logged and recorded, and the worker
//! moves on. Workers share nothing but the queue, the read-only runner, and
//! the console.

mod outcome;

pub use outcome::{JobOutcome, Summary};

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::console::Console;
use crate::queue::JobReceiver;
use crate::runner::JobRunner;

/// Default number of concurrent workers.
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Handle to a running pool. [`PoolHandle::join`] waits for every worker.
pub struct PoolHandle {
    workers: JoinSet<Vec<JobOutcome>>,
}

/// Start `concurrency` workers (at least one) pulling from `queue`.
pub fn spawn_pool<R: JobRunner>(
    runner: Arc<R>,
    queue: JobReceiver,
    concurrency: usize,
    console: Console,
) -> PoolHandle {
    let concurrency = concurrency.max(1);
    let mut workers = JoinSet::new();
    for worker in 1..=concurrency {
        let runner = Arc::clone(&runner);
        let queue = queue.clone();
        let console = console.clone();
        workers.spawn(async move { worker_loop(worker, runner, queue, console).await });
    }
    tracing::debug!(concurrency, "worker pool started");
    PoolHandle { workers }
}

impl PoolHandle {
    /// Number of workers still running.
    pub fn workers(&self) -> usize {
        self.workers.len()
    }

    /// Block until the queue is closed and drained and every in-flight job has
    /// finished. Returns all recorded outcomes.
    pub async fn join(mut self) -> Summary {
        let mut summary = Summary::default();
        while let Some(res) = self.workers.join_next().await {
            match res {
                Ok(outcomes) => summary.absorb(outcomes),
                Err(e) => tracing::error!("worker task join: {}", e),
            }
        }
        tracing::info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            "worker pool finished"
        );
        summary
    }
}

async fn worker_loop<R: JobRunner>(
    worker: usize,
    runner: Arc<R>,
    queue: JobReceiver,
    console: Console,
) -> Vec<JobOutcome> {
    let mut outcomes = Vec::new();
    while let Some(target) = queue.next().await {
        tracing::info!(worker, target = %target, "job started");
        let result = runner.run_job(worker, &target).await;
        match &result {
            Ok(()) => {
                tracing::info!(worker, target = %target, "job finished");
                console.line(format!("✅ Worker {} finished downloading: {}", worker, target));
            }
            Err(e) => {
                tracing::warn!(worker, target = %target, "job failed: {}", e);
                console.warn(format!("Worker {} failed on {}: {}", worker, target, e));
            }
        }
        outcomes.push(JobOutcome {
            worker,
            target,
            result,
        });
    }
    tracing::debug!(worker, "worker exiting: queue drained");
    outcomes
}
