use matchcast_application::ports::{TriggerOutcome, TriggerSource};
use matchcast_application::use_cases::{RefreshError, RefreshOutcome, RefreshResourceUseCase};
use matchcast_domain::ResourceClass;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

/// How a single refresh cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleReport {
    Published(RefreshOutcome),
    Failed(RefreshError),
    /// Shutdown won the race; nothing was cached or published.
    Abandoned,
}

/// Result of asking a [`RefreshJob`] to run.
#[derive(Debug)]
pub enum Dispatch {
    Started(JoinHandle<CycleReport>),
    Coalesced,
    ShuttingDown,
}

impl Dispatch {
    pub fn outcome(&self) -> TriggerOutcome {
        match self {
            Self::Started(_) => TriggerOutcome::Started,
            Self::Coalesced => TriggerOutcome::Coalesced,
            Self::ShuttingDown => TriggerOutcome::ShuttingDown,
        }
    }
}

/// Clears the in-flight flag when the cycle task ends, including on panic or
/// abort.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Refresh driver for one resource class.
///
/// Ticks and manual triggers both go through [`RefreshJob::trigger`]. At most
/// one cycle runs at a time; anything arriving while a cycle is in flight is
/// dropped, never queued.
pub struct RefreshJob {
    class: ResourceClass,
    refresh: Arc<RefreshResourceUseCase>,
    in_flight: Arc<AtomicBool>,
    shutdown: CancellationToken,
    tracker: TaskTracker,
}

impl RefreshJob {
    pub fn new(class: ResourceClass, refresh: Arc<RefreshResourceUseCase>) -> Self {
        Self {
            class,
            refresh,
            in_flight: Arc::new(AtomicBool::new(false)),
            shutdown: CancellationToken::new(),
            tracker: TaskTracker::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn with_tracker(mut self, tracker: TaskTracker) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn class(&self) -> &ResourceClass {
        &self.class
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn trigger(&self, source: TriggerSource) -> TriggerOutcome {
        self.dispatch(source).outcome()
    }

    /// Spawns a cycle unless one is already running or shutdown has begun.
    pub fn dispatch(&self, source: TriggerSource) -> Dispatch {
        if self.shutdown.is_cancelled() {
            return Dispatch::ShuttingDown;
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(
                resource = %self.class.name,
                source = %source,
                "Refresh already in flight, trigger coalesced"
            );
            return Dispatch::Coalesced;
        }

        let guard = InFlightGuard(Arc::clone(&self.in_flight));
        let class = self.class.clone();
        let refresh = Arc::clone(&self.refresh);
        let shutdown = self.shutdown.clone();

        debug!(resource = %class.name, source = %source, "Refresh cycle started");

        let handle = self.tracker.spawn(async move {
            let _guard = guard;
            run_cycle(&class, &refresh, &shutdown).await
        });

        Dispatch::Started(handle)
    }

    /// Spawns the periodic ticker. Manual-only classes get none.
    ///
    /// The first tick fires immediately; ticks missed while the runtime was
    /// busy are skipped rather than bunched.
    pub fn start(self: Arc<Self>) {
        let Some(period) = self.class.refresh_interval else {
            debug!(resource = %self.class.name, "Manual-only resource, no ticker");
            return;
        };

        info!(
            resource = %self.class.name,
            channel = %self.class.channel(),
            interval_secs = period.as_secs(),
            "Refresh ticker started"
        );

        let tracker = self.tracker.clone();
        tracker.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = self.shutdown.cancelled() => {
                        info!(resource = %self.class.name, "Refresh ticker: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.trigger(TriggerSource::Tick);
                    }
                }
            }
        });
    }
}

async fn run_cycle(
    class: &ResourceClass,
    refresh: &RefreshResourceUseCase,
    shutdown: &CancellationToken,
) -> CycleReport {
    tokio::select! {
        biased;
        _ = shutdown.cancelled() => {
            info!(resource = %class.name, key = %class.key(), "Refresh abandoned on shutdown");
            CycleReport::Abandoned
        }
        result = refresh.execute(class) => match result {
            Ok(outcome) => {
                debug!(
                    resource = %class.name,
                    channel = %outcome.channel,
                    delivered = outcome.delivered,
                    "Refresh cycle completed"
                );
                CycleReport::Published(outcome)
            }
            Err(e) => {
                error!(
                    resource = %class.name,
                    key = %class.key(),
                    error = %e,
                    "Refresh cycle failed"
                );
                CycleReport::Failed(e)
            }
        }
    }
}
