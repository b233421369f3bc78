//! Job queue: unbounded producers, multiple consumers, single close signal.
//!
//! Built on a `tokio` unbounded mpsc channel whose receiver is shared behind an
//! async mutex, so each target is handed to exactly one consumer. The queue is
//! closed when the [`JobSender`] is dropped (or [`JobSender::close`] is called);
//! consumers then drain what remains and see `None`.

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use crate::target::DownloadTarget;

/// Producer half. Dropping it closes the queue.
#[derive(Debug)]
pub struct JobSender {
    tx: mpsc::UnboundedSender<DownloadTarget>,
}

/// Consumer half. Cheap to clone; every clone pulls from the same queue.
#[derive(Debug, Clone)]
pub struct JobReceiver {
    rx: Arc<Mutex<mpsc::UnboundedReceiver<DownloadTarget>>>,
}

/// Create a new queue.
pub fn job_queue() -> (JobSender, JobReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        JobSender { tx },
        JobReceiver {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

impl JobSender {
    /// Enqueue a target. Returns false if every consumer is gone.
    pub fn push(&self, target: DownloadTarget) -> bool {
        self.tx.send(target).is_ok()
    }

    /// Enqueue several targets in order; returns how many were accepted.
    pub fn extend(&self, targets: impl IntoIterator<Item = DownloadTarget>) -> usize {
        targets.into_iter().take_while(|t| self.push(t.clone())).count()
    }

    /// Close the queue. Consumers stop once it is empty.
    pub fn close(self) {
        drop(self);
    }
}

impl JobReceiver {
    /// Next target, waiting while the queue is empty and still open.
    /// Returns `None` once the queue is closed and drained.
    pub async fn next(&self) -> Option<DownloadTarget> {
        self.rx.lock().await.recv().await
    }
}
