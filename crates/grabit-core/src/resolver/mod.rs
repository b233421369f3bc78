//! Target resolver: expand an input URL into concrete download targets.
//!
//! Runs the downloader in flat-playlist mode (`--flat-playlist -J`). A
//! collection yields one watch URL per entry; anything else (probe could not
//! run, non-zero exit, no entries) falls back to the input as a single target.
//! Only unparsable probe output is an error, and only for that input.

mod parse;

pub use parse::{targets_from_listing, watch_url};

use std::process::Stdio;

use crate::options::DownloadOptions;
use crate::target::DownloadTarget;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("malformed probe output: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Resolve one (already trimmed) input URL.
pub async fn resolve(
    input: &str,
    opts: &DownloadOptions,
) -> Result<Vec<DownloadTarget>, ResolveError> {
    let output = opts
        .downloader_command()
        .args(["--flat-playlist", "-J", input])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await;

    let output = match output {
        Ok(o) => o,
        Err(e) => {
            tracing::debug!(input, "probe could not run ({}); treating as single target", e);
            return Ok(vec![DownloadTarget::new(input)]);
        }
    };
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(
            input,
            status = %output.status,
            stderr = %stderr.trim(),
            "probe failed; treating as single target"
        );
        return Ok(vec![DownloadTarget::new(input)]);
    }

    let targets = targets_from_listing(&output.stdout, &opts.watch_url_template)?;
    if targets.is_empty() {
        tracing::debug!(input, "not a collection");
        return Ok(vec![DownloadTarget::new(input)]);
    }
    tracing::info!(input, entries = targets.len(), "expanded collection");
    Ok(targets)
}

/// Split a comma-separated URL list, trimming whitespace and dropping empty items.
pub fn split_inputs(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
