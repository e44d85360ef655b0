use crate::refresh::RefreshJob;
use matchcast_application::ports::{RefreshTrigger, TriggerOutcome, TriggerSource};
use matchcast_domain::DomainError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::info;

/// Handle over every running [`RefreshJob`], returned by
/// [`JobRunner::start`](crate::JobRunner::start).
pub struct RefreshScheduler {
    jobs: HashMap<Arc<str>, Arc<RefreshJob>>,
    shutdown: CancellationToken,
    tracker: TaskTracker,
}

impl RefreshScheduler {
    pub(crate) fn new(
        jobs: HashMap<Arc<str>, Arc<RefreshJob>>,
        shutdown: CancellationToken,
        tracker: TaskTracker,
    ) -> Self {
        Self {
            jobs,
            shutdown,
            tracker,
        }
    }

    pub fn job(&self, resource: &str) -> Option<&Arc<RefreshJob>> {
        self.jobs.get(resource)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Stops every ticker, abandons in-flight cycles and waits for all of
    /// their tasks to finish.
    pub async fn shutdown(&self) {
        info!(jobs = self.jobs.len(), "Stopping refresh scheduler");
        self.shutdown.cancel();
        self.tracker.close();
        self.tracker.wait().await;
        info!("Refresh scheduler stopped");
    }
}

impl RefreshTrigger for RefreshScheduler {
    fn trigger(
        &self,
        resource: &str,
        source: TriggerSource,
    ) -> Result<TriggerOutcome, DomainError> {
        let job = self
            .jobs
            .get(resource)
            .ok_or_else(|| DomainError::UnknownResource(resource.to_string()))?;
        Ok(job.trigger(source))
    }
}
