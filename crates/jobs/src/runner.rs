use crate::{CacheReaperJob, RefreshJob, RefreshScheduler};
use matchcast_application::use_cases::RefreshResourceUseCase;
use matchcast_domain::ResourceClass;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = JobRunner::new()
///     .with_refresh(refresh_use_case, catalog.all().cloned())
///     .with_cache_reaper(CacheReaperJob::new(cache, 600))
///     .start();
/// ```
pub struct JobRunner {
    refresh: Option<(Arc<RefreshResourceUseCase>, Vec<ResourceClass>)>,
    cache_reaper: Option<CacheReaperJob>,
    shutdown: CancellationToken,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            refresh: None,
            cache_reaper: None,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_refresh(
        mut self,
        refresh: Arc<RefreshResourceUseCase>,
        classes: impl IntoIterator<Item = ResourceClass>,
    ) -> Self {
        self.refresh = Some((refresh, classes.into_iter().collect()));
        self
    }

    pub fn with_cache_reaper(mut self, job: CacheReaperJob) -> Self {
        self.cache_reaper = Some(job);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Start all registered background jobs.
    ///
    /// Every resource class gets a [`RefreshJob`] so it can be triggered
    /// manually; only classes with an interval get a ticker.
    pub fn start(self) -> RefreshScheduler {
        info!("Starting background job runner");

        let tracker = TaskTracker::new();
        let mut jobs = HashMap::new();

        if let Some((refresh, classes)) = self.refresh {
            for class in classes {
                let name = Arc::clone(&class.name);
                let job = Arc::new(
                    RefreshJob::new(class, Arc::clone(&refresh))
                        .with_cancellation(self.shutdown.clone())
                        .with_tracker(tracker.clone()),
                );
                Arc::clone(&job).start();
                jobs.insert(name, job);
            }
        }

        if let Some(job) = self.cache_reaper {
            Arc::new(job.with_cancellation(self.shutdown.clone())).start();
        }

        info!(refresh_jobs = jobs.len(), "All background jobs started");

        RefreshScheduler::new(jobs, self.shutdown, tracker)
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
