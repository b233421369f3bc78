//! Shared terminal region for all workers.
//!
//! Lines are printed above the live progress bars through `MultiProgress`, so
//! concurrent workers never tear each other's bars. When the draw target is
//! hidden (stdout not a terminal, or tests) lines go straight to stdout/stderr.

use indicatif::{MultiProgress, ProgressDrawTarget};

#[derive(Debug, Clone)]
pub struct Console {
    multi: MultiProgress,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Console drawing progress bars on stdout, the same stream as every other
    /// regular line, so `grabit ... > log` keeps the per-worker output.
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stdout()),
        }
    }

    /// Console with no visible bars.
    pub fn hidden() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        }
    }

    pub(crate) fn multi(&self) -> &MultiProgress {
        &self.multi
    }

    /// Print a regular line (echoed downloader output, status lines).
    pub fn line(&self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        if self.multi.is_hidden() || self.multi.println(msg).is_err() {
            println!("{}", msg);
        }
    }

    /// Print a warning with the `⚠️` marker.
    pub fn warn(&self, msg: impl AsRef<str>) {
        let msg = format!("⚠️ {}", msg.as_ref());
        if self.multi.is_hidden() || self.multi.println(&msg).is_err() {
            eprintln!("{}", msg);
        }
    }
}
