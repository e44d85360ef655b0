use matchcast_application::ports::ResponseCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically drops expired cache entries so keys that are never read
/// again do not linger.
pub struct CacheReaperJob {
    cache: Arc<dyn ResponseCache>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheReaperJob {
    pub fn new(cache: Arc<dyn ResponseCache>, interval_secs: u64) -> Self {
        Self {
            cache,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> Option<tokio::task::JoinHandle<()>> {
        if self.interval_secs == 0 {
            info!("Cache reaper disabled");
            return None;
        }

        info!(interval_secs = self.interval_secs, "Starting cache reaper job");

        Some(tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs);
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheReaperJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let purged = self.cache.purge_expired();
                        debug!(purged, remaining = self.cache.len(), "Cache reaper pass completed");
                    }
                }
            }
        }))
    }
}
