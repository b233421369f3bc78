//! Default action: resolve the given URLs and download them with the worker pool.

use anyhow::Result;
use grabit_core::console::Console;
use grabit_core::options::DownloadOptions;
use grabit_core::session;
use std::sync::Arc;

pub async fn run_downloads(
    inputs: &[String],
    options: DownloadOptions,
    concurrency: usize,
) -> Result<()> {
    tracing::info!(
        inputs = inputs.len(),
        concurrency,
        audio_only = options.audio_only,
        quality = %options.quality,
        out = %options.output_dir.display(),
        "starting downloads"
    );

    let console = Console::new();
    let summary = session::run_session(inputs, Arc::new(options), concurrency, &console).await?;

    if summary.total() == 0 {
        println!("Nothing to download.");
        return Ok(());
    }
    println!(
        "Done: {} succeeded, {} failed",
        summary.succeeded(),
        summary.failed()
    );
    for outcome in summary.failures() {
        let reason = match &outcome.result {
            Err(e) => e.to_string(),
            Ok(()) => continue,
        };
        println!("  ❌ {} (worker {}): {}", outcome.target, outcome.worker, reason);
    }
    Ok(())
}
