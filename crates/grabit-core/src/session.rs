//! One full run: prepare the output directory, start the pool, resolve inputs
//! into the queue while workers drain it, then wait for everything.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::console::Console;
use crate::options::DownloadOptions;
use crate::pool::{spawn_pool, Summary};
use crate::queue::job_queue;
use crate::resolver;
use crate::runner::ProcessRunner;

/// Create the output directory (and parents). Failure is fatal to the run.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}

/// Download every input with `concurrency` workers.
///
/// Only setup errors are returned; per-input resolution failures and per-job
/// failures are logged and reflected in the returned [`Summary`].
pub async fn run_session(
    inputs: &[String],
    options: Arc<DownloadOptions>,
    concurrency: usize,
    console: &Console,
) -> Result<Summary> {
    prepare_output_dir(&options.output_dir)?;

    let (tx, rx) = job_queue();
    let runner = Arc::new(ProcessRunner::new(Arc::clone(&options), console.clone()));
    let pool = spawn_pool(runner, rx, concurrency, console.clone());
    tracing::debug!(workers = pool.workers(), "resolving inputs");

    let mut enqueued = 0usize;
    for input in inputs {
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        match resolver::resolve(input, &options).await {
            Ok(targets) => {
                tracing::debug!(input, count = targets.len(), "enqueueing targets");
                enqueued += tx.extend(targets);
            }
            Err(e) => {
                tracing::warn!(input, "failed to extract videos: {}", e);
                console.warn(format!("Failed to extract videos from {}: {}", input, e));
            }
        }
    }
    tx.close();
    tracing::info!(enqueued, "all inputs resolved; queue closed");

    Ok(pool.join().await)
}
