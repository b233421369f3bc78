//! Live progress for one job: sanitize and echo every line, drive a lazily
//! created progress bar from recognized `[download]` reports.

mod parse;
mod sanitize;

pub use parse::{parse_progress_line, PROGRESS_MARKER};
pub use sanitize::sanitize_line;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::console::Console;

const BAR_TEMPLATE: &str = "{prefix} {pos:>3}/{len} [{bar:40.cyan/blue}] {percent:>3}% {elapsed}";

/// Per-job renderer owned by a single worker. The bar is created on the first
/// parsed percentage and dropped with the renderer, so one job's progress never
/// leaks into the next.
pub struct ProgressRenderer<'a> {
    worker: usize,
    console: &'a Console,
    bar: Option<ProgressBar>,
    percent: Option<u64>,
}

impl<'a> ProgressRenderer<'a> {
    pub fn new(worker: usize, console: &'a Console) -> Self {
        Self {
            worker,
            console,
            bar: None,
            percent: None,
        }
    }

    /// Most recent parsed percentage for this job.
    pub fn percent(&self) -> Option<u64> {
        self.percent
    }

    /// Current bar position, if a bar was created.
    pub fn bar_position(&self) -> Option<u64> {
        self.bar.as_ref().map(|b| b.position())
    }

    /// Handle one raw output line; returns the percentage if it was a progress report.
    pub fn handle_line(&mut self, raw: &str) -> Option<u64> {
        let line = sanitize_line(raw);
        self.console.line(format!("Worker {}: {}", self.worker, line));

        let percent = parse_progress_line(&line)?;
        let (console, worker) = (self.console, self.worker);
        let bar = self.bar.get_or_insert_with(|| new_bar(console, worker));
        bar.set_position(percent);
        self.percent = Some(percent);
        Some(percent)
    }

    /// Finish the bar, if any. Safe to call when no progress was ever reported.
    pub fn finish(self) {
        drop(self);
    }
}

impl Drop for ProgressRenderer<'_> {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

fn new_bar(console: &Console, worker: usize) -> ProgressBar {
    let style = ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░");
    let bar = console.multi().add(ProgressBar::new(100));
    bar.set_style(style);
    bar.set_prefix(format!("Worker {}", worker));
    bar.tick();
    bar
}

/// Decode one raw output line: drop the trailing `\n`/`\r\n`, replace invalid
/// UTF-8 with U+FFFD.
pub fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Consume `reader` line by line until end of stream, feeding `renderer`.
/// Returns the last parsed percentage.
///
/// Takes the reader by value; pass `&mut reader` to keep it for draining.
/// Bytes are decoded lossily, so only a real read error ends the stream early;
/// it is returned after the bar is finished.
pub async fn consume_lines<R>(
    mut reader: R,
    mut renderer: ProgressRenderer<'_>,
) -> std::io::Result<Option<u64>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let result = loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break Ok(renderer.percent()),
            Ok(_) => {
                renderer.handle_line(&decode_line(&buf));
            }
            Err(e) => break Err(e),
        }
    };
    renderer.finish();
    result
}
