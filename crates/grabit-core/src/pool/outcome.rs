//! Per-job outcomes and the end-of-run summary.

use crate::runner::JobError;
use crate::target::DownloadTarget;

/// How one job ended. Recorded once per target, never retried.
#[derive(Debug)]
pub struct JobOutcome {
    pub worker: usize,
    pub target: DownloadTarget,
    pub result: Result<(), JobError>,
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// All outcomes from a pool run, in completion order per worker.
#[derive(Debug, Default)]
pub struct Summary {
    pub outcomes: Vec<JobOutcome>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// Outcomes of failed jobs.
    pub fn failures(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub(crate) fn absorb(&mut self, outcomes: Vec<JobOutcome>) {
        self.outcomes.extend(outcomes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn counts() {
        let mut summary = Summary::default();
        summary.absorb(vec![
            JobOutcome {
                worker: 1,
                target: DownloadTarget::new("a"),
                result: Ok(()),
            },
            JobOutcome {
                worker: 2,
                target: DownloadTarget::new("b"),
                result: Err(JobError::TimedOut(Duration::from_secs(1))),
            },
        ]);
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.failed(), 1);
        let failed: Vec<_> = summary.failures().map(|o| (o.worker, &o.target)).collect();
        assert_eq!(failed, vec![(2, &DownloadTarget::new("b"))]);
    }
}
